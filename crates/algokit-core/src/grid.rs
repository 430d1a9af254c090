//! Breadth-first and depth-first traversal over rectangular boolean grids.
//!
//! Cells are addressed as `(row, col)`; `true` marks a passable (or land)
//! cell. Movement is 4-directional. Neighbor candidates are computed with
//! `wrapping_sub`, so row/column 0 wraps to `usize::MAX` and falls out of
//! range on the bounds check.

use std::collections::VecDeque;

fn neighbors((r, c): (usize, usize)) -> [(usize, usize); 4] {
    [
        (r.wrapping_sub(1), c),
        (r + 1, c),
        (r, c.wrapping_sub(1)),
        (r, c + 1),
    ]
}

fn cell(grid: &[Vec<bool>], (r, c): (usize, usize)) -> bool {
    grid.get(r).and_then(|row| row.get(c)).copied() == Some(true)
}

/// Shortest unweighted path length (number of steps) from `start` to
/// `goal`, moving one cell up/down/left/right at a time over passable
/// (`true`) cells.
///
/// Returns `None` when `goal` is unreachable or either endpoint is out of
/// bounds or blocked; `Some(0)` when `start == goal`.
///
/// # Examples
///
/// ```
/// use algokit_core::shortest_path;
///
/// let o = true;  // open
/// let x = false; // wall
/// let grid = vec![
///     vec![o, o, x],
///     vec![x, o, o],
///     vec![x, x, o],
/// ];
/// assert_eq!(shortest_path(&grid, (0, 0), (2, 2)), Some(4));
/// assert_eq!(shortest_path(&grid, (0, 0), (2, 0)), None);
/// ```
pub fn shortest_path(
    open: &[Vec<bool>],
    start: (usize, usize),
    goal: (usize, usize),
) -> Option<usize> {
    if !cell(open, start) || !cell(open, goal) {
        return None;
    }
    let mut visited: Vec<Vec<bool>> = open.iter().map(|row| vec![false; row.len()]).collect();
    let mut queue = VecDeque::new();
    visited[start.0][start.1] = true;
    queue.push_back((start, 0));
    while let Some((pos, dist)) = queue.pop_front() {
        if pos == goal {
            return Some(dist);
        }
        for next in neighbors(pos) {
            if cell(open, next) && !visited[next.0][next.1] {
                visited[next.0][next.1] = true;
                queue.push_back((next, dist + 1));
            }
        }
    }
    None
}

/// Number of 4-connected components of `true` cells ("islands").
///
/// Flood fill runs on an explicit stack, so component size is bounded by
/// memory rather than recursion depth. The input grid is not modified;
/// visited cells are tracked in a separate matrix.
///
/// # Examples
///
/// ```
/// use algokit_core::count_islands;
///
/// let grid = vec![
///     vec![true, true, false],
///     vec![false, false, false],
///     vec![false, true, true],
/// ];
/// assert_eq!(count_islands(&grid), 2);
/// ```
pub fn count_islands(land: &[Vec<bool>]) -> usize {
    let mut visited: Vec<Vec<bool>> = land.iter().map(|row| vec![false; row.len()]).collect();
    let mut count = 0;
    for r in 0..land.len() {
        for c in 0..land[r].len() {
            if land[r][c] && !visited[r][c] {
                count += 1;
                flood(land, &mut visited, (r, c));
            }
        }
    }
    count
}

fn flood(land: &[Vec<bool>], visited: &mut [Vec<bool>], origin: (usize, usize)) {
    let mut stack = vec![origin];
    visited[origin.0][origin.1] = true;
    while let Some(pos) = stack.pop() {
        for next in neighbors(pos) {
            if cell(land, next) && !visited[next.0][next.1] {
                visited[next.0][next.1] = true;
                stack.push(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const O: bool = true;
    const X: bool = false;

    fn maze() -> Vec<Vec<bool>> {
        vec![
            vec![O, O, O, X, O],
            vec![X, X, O, X, O],
            vec![O, O, O, O, O],
            vec![O, X, X, X, X],
            vec![O, O, O, O, O],
        ]
    }

    #[test]
    fn shortest_path_threads_the_maze() {
        let grid = maze();
        assert_eq!(shortest_path(&grid, (0, 0), (0, 4)), Some(8));
        assert_eq!(shortest_path(&grid, (0, 0), (4, 4)), Some(12));
        assert_eq!(shortest_path(&grid, (0, 0), (2, 0)), Some(6));
    }

    #[test]
    fn start_equals_goal_is_zero_steps() {
        assert_eq!(shortest_path(&maze(), (2, 2), (2, 2)), Some(0));
    }

    #[test]
    fn unreachable_goal_is_none() {
        let grid = vec![vec![O, X, O]];
        assert_eq!(shortest_path(&grid, (0, 0), (0, 2)), None);
    }

    #[test]
    fn blocked_or_out_of_bounds_endpoints_are_none() {
        let grid = maze();
        assert_eq!(shortest_path(&grid, (1, 0), (0, 0)), None, "blocked start");
        assert_eq!(shortest_path(&grid, (0, 0), (1, 1)), None, "blocked goal");
        assert_eq!(shortest_path(&grid, (9, 0), (0, 0)), None);
        assert_eq!(shortest_path(&grid, (0, 0), (0, 9)), None);
        assert_eq!(shortest_path(&[], (0, 0), (0, 0)), None);
    }

    #[test]
    fn count_islands_counts_components() {
        let grid = vec![
            vec![O, O, X, X, X],
            vec![O, O, X, X, X],
            vec![X, X, O, X, X],
            vec![X, X, X, O, O],
        ];
        assert_eq!(count_islands(&grid), 3);
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let grid = vec![vec![O, X], vec![X, O]];
        assert_eq!(count_islands(&grid), 2);
    }

    #[test]
    fn count_islands_degenerate_grids() {
        assert_eq!(count_islands(&[]), 0);
        assert_eq!(count_islands(&[vec![X, X, X]]), 0);
        assert_eq!(count_islands(&[vec![O, O, O]]), 1);
        let all_land = vec![vec![O; 40]; 40];
        assert_eq!(count_islands(&all_land), 1);
    }

    #[test]
    fn count_islands_does_not_mutate_input() {
        let grid = vec![vec![O, X], vec![O, O]];
        let copy = grid.clone();
        count_islands(&grid);
        assert_eq!(grid, copy);
    }
}
