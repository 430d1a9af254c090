//! Searching routines: linear scan, binary search over a sorted slice
//! (iterative and recursive), and binary search over a monotonic answer
//! space.
//!
//! "Not found" is reported as `None` rather than a -1 sentinel. The binary
//! searches treat sortedness as a silent precondition: on unsorted input
//! they return an arbitrary (but memory-safe) answer.

use std::cmp::Ordering;

/// Returns the index of the first element equal to `target`, scanning left
/// to right in O(n).
///
/// # Examples
///
/// ```
/// use algokit_core::linear_search;
///
/// assert_eq!(linear_search(&[4, 2, 7, 2], &2), Some(1));
/// assert_eq!(linear_search(&[4, 2, 7, 2], &9), None);
/// ```
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    for (i, item) in items.iter().enumerate() {
        if item == target {
            return Some(i);
        }
    }
    None
}

/// Iterative binary search over a sorted slice, O(log n).
///
/// Returns the index of an element equal to `target`, or `None`. When
/// `target` occurs more than once, which index is returned is unspecified.
///
/// # Examples
///
/// ```
/// use algokit_core::binary_search;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9], &5), Some(2));
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9], &4), None);
/// ```
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Recursive binary search over a sorted slice.
///
/// Same contract as [`binary_search`]; the recursion halves the half-open
/// range `[low, high)` so the call depth is O(log n).
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    search_range(items, target, 0, items.len())
}

fn search_range<T: Ord>(items: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }
    let mid = low + (high - low) / 2;
    match items[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_range(items, target, mid + 1, high),
        Ordering::Greater => search_range(items, target, low, mid),
    }
}

/// Binary search on answer: the smallest value in `[low, high]` (inclusive)
/// for which `feasible` returns `true`, or `None` if no value qualifies.
///
/// `feasible` must be monotonic over the range: once it returns `true` for
/// some value it returns `true` for every larger value. Under that
/// precondition the search makes O(log(high - low)) predicate calls.
///
/// # Examples
///
/// ```
/// use algokit_core::min_feasible;
///
/// // Smallest x with x * x >= 50.
/// assert_eq!(min_feasible(0, 100, |x| x * x >= 50), Some(8));
/// assert_eq!(min_feasible(0, 100, |_| false), None);
/// ```
pub fn min_feasible<F>(low: i64, high: i64, feasible: F) -> Option<i64>
where
    F: Fn(i64) -> bool,
{
    let mut low = low;
    let mut high = high;
    let mut best = None;
    while low <= high {
        // Widen to i128: `high - low` itself can overflow i64 for extreme
        // ranges.
        let mid = ((i128::from(low) + i128::from(high)) / 2) as i64;
        if feasible(mid) {
            best = Some(mid);
            match mid.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            }
        } else {
            match mid.checked_add(1) {
                Some(l) => low = l,
                None => break,
            }
        }
    }
    best
}
