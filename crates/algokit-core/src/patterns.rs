//! Single-pass array techniques: Kadane's maximum subarray, fixed and
//! variable sliding windows, two pointers over a sorted slice, prefix sums
//! with a count map, and hash-based frequency counting.
//!
//! Each function is an independent O(n) scan; none holds state between
//! calls. Empty or undersized input is reported as `None` (or zero for the
//! counting functions) instead of a sentinel value.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Kadane's algorithm: the largest sum over all non-empty contiguous
/// subarrays, or `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use algokit_core::max_subarray;
///
/// assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
/// assert_eq!(max_subarray(&[-3, -1, -2]), Some(-1));
/// assert_eq!(max_subarray(&[]), None);
/// ```
pub fn max_subarray(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut best = first;
    let mut current = first;
    for &num in rest {
        current = num.max(current + num);
        best = best.max(current);
    }
    Some(best)
}

/// Fixed sliding window: the maximum sum over all windows of exactly `k`
/// consecutive elements.
///
/// Returns `None` when `k == 0` or `k > nums.len()` (no window exists).
///
/// # Examples
///
/// ```
/// use algokit_core::max_sum_window;
///
/// assert_eq!(max_sum_window(&[2, 1, 5, 1, 3, 2], 3), Some(9));
/// assert_eq!(max_sum_window(&[1, 2], 3), None);
/// ```
pub fn max_sum_window(nums: &[i64], k: usize) -> Option<i64> {
    if k == 0 || k > nums.len() {
        return None;
    }
    let mut sum: i64 = nums[..k].iter().sum();
    let mut best = sum;
    for i in 0..nums.len() - k {
        sum = sum - nums[i] + nums[i + k];
        best = best.max(sum);
    }
    Some(best)
}

/// Variable sliding window: the length of the longest contiguous run of
/// pairwise-distinct elements.
///
/// The right edge expands one element per step; the left edge advances past
/// the previous occurrence whenever the incoming element is already inside
/// the window. Each element enters and leaves the window set at most once,
/// so the scan is O(n).
///
/// # Examples
///
/// ```
/// use algokit_core::longest_distinct_window;
///
/// assert_eq!(longest_distinct_window(b"abcabcbb"), 3);
/// assert_eq!(longest_distinct_window(b"bbbb"), 1);
/// ```
pub fn longest_distinct_window<T: Eq + Hash + Clone>(items: &[T]) -> usize {
    let mut window = HashSet::new();
    let mut left = 0;
    let mut longest = 0;
    for right in 0..items.len() {
        while window.contains(&items[right]) {
            window.remove(&items[left]);
            left += 1;
        }
        window.insert(items[right].clone());
        longest = longest.max(right - left + 1);
    }
    longest
}

/// Two pointers over a sorted slice: indices `(i, j)` with `i < j` and
/// `nums[i] + nums[j] == target`, or `None`.
///
/// The pointers start at the two ends and converge: a sum below `target`
/// advances the left pointer, a sum above retreats the right one.
/// Sortedness is a silent precondition.
///
/// # Examples
///
/// ```
/// use algokit_core::two_sum_sorted;
///
/// assert_eq!(two_sum_sorted(&[1, 3, 4, 6, 8], 10), Some((2, 3)));
/// assert_eq!(two_sum_sorted(&[1, 3, 4, 6, 8], 100), None);
/// ```
pub fn two_sum_sorted(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut left = 0;
    let mut right = nums.len().checked_sub(1)?;
    while left < right {
        let sum = nums[left] + nums[right];
        match sum.cmp(&target) {
            std::cmp::Ordering::Equal => return Some((left, right)),
            std::cmp::Ordering::Less => left += 1,
            std::cmp::Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Prefix-sum-with-map: the number of contiguous subarrays summing to
/// exactly `target`.
///
/// Maintains counts of all running prefix sums seen so far; a subarray
/// ending at the current element sums to `target` exactly when
/// `running - target` occurred as an earlier prefix sum. The map is seeded
/// with `{0: 1}` so subarrays starting at index 0 are counted.
///
/// # Examples
///
/// ```
/// use algokit_core::count_subarrays_with_sum;
///
/// assert_eq!(count_subarrays_with_sum(&[1, 1, 1], 2), 2);
/// assert_eq!(count_subarrays_with_sum(&[1, -1, 0], 0), 3);
/// ```
pub fn count_subarrays_with_sum(nums: &[i64], target: i64) -> usize {
    let mut prefix_counts: HashMap<i64, usize> = HashMap::new();
    prefix_counts.insert(0, 1);
    let mut running = 0_i64;
    let mut count = 0;
    for &num in nums {
        running += num;
        count += prefix_counts.get(&(running - target)).copied().unwrap_or(0);
        *prefix_counts.entry(running).or_insert(0) += 1;
    }
    count
}

/// Builds an element-to-occurrence-count map over the slice.
///
/// # Examples
///
/// ```
/// use algokit_core::count_frequencies;
///
/// let counts = count_frequencies(&["a", "b", "a"]);
/// assert_eq!(counts[&"a"], 2);
/// assert_eq!(counts[&"b"], 1);
/// ```
pub fn count_frequencies<T: Eq + Hash + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// Returns `true` if any element occurs more than once (hash-set scan,
/// O(n) expected).
pub fn has_duplicate<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_subarray_mixed_signs() {
        assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
    }

    #[test]
    fn max_subarray_edge_cases() {
        assert_eq!(max_subarray(&[]), None);
        assert_eq!(max_subarray(&[7]), Some(7));
        assert_eq!(max_subarray(&[-7]), Some(-7));
        // All negative: the best subarray is the single largest element.
        assert_eq!(max_subarray(&[-8, -3, -6, -2, -5, -4]), Some(-2));
        // All positive: the whole slice wins.
        assert_eq!(max_subarray(&[1, 2, 3, 4]), Some(10));
    }

    #[test]
    fn max_sum_window_basic() {
        assert_eq!(max_sum_window(&[2, 1, 5, 1, 3, 2], 3), Some(9));
        assert_eq!(max_sum_window(&[100, 200, 300, 400], 2), Some(700));
        assert_eq!(max_sum_window(&[-1, -2, -3], 2), Some(-3));
    }

    #[test]
    fn max_sum_window_degenerate_widths() {
        assert_eq!(max_sum_window(&[1, 2, 3], 0), None);
        assert_eq!(max_sum_window(&[1, 2], 3), None);
        // k equal to the length: exactly one window.
        assert_eq!(max_sum_window(&[1, 2, 3], 3), Some(6));
        assert_eq!(max_sum_window(&[], 1), None);
    }

    #[test]
    fn longest_distinct_window_classics() {
        assert_eq!(longest_distinct_window(b"abcabcbb"), 3);
        assert_eq!(longest_distinct_window(b"bbbbb"), 1);
        assert_eq!(longest_distinct_window(b"pwwkew"), 3);
        assert_eq!(longest_distinct_window(b""), 0);
        assert_eq!(longest_distinct_window(&[1, 2, 3, 4]), 4);
    }

    #[test]
    fn two_sum_sorted_hits_and_misses() {
        assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum_sorted(&[1, 3, 4, 6, 8], 10), Some((2, 3)));
        assert_eq!(two_sum_sorted(&[1, 3, 4, 6, 8], 2), None);
        assert_eq!(two_sum_sorted(&[], 5), None);
        // A single element has no pair; must not pair with itself.
        assert_eq!(two_sum_sorted(&[5], 10), None);
        assert_eq!(two_sum_sorted(&[-4, -1, 3, 9], 5), Some((0, 3)));
    }

    #[test]
    fn count_subarrays_with_sum_counts_all_starts() {
        assert_eq!(count_subarrays_with_sum(&[1, 1, 1], 2), 2);
        assert_eq!(count_subarrays_with_sum(&[1, 2, 3], 3), 2);
        // Zero-sum prefixes and negatives.
        assert_eq!(count_subarrays_with_sum(&[1, -1, 0], 0), 3);
        assert_eq!(count_subarrays_with_sum(&[], 0), 0);
        assert_eq!(count_subarrays_with_sum(&[5], 5), 1);
    }

    #[test]
    fn count_frequencies_tallies() {
        let counts = count_frequencies(&[3, 1, 3, 3, 1]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&3], 3);
        assert_eq!(counts[&1], 2);
        assert!(count_frequencies::<i32>(&[]).is_empty());
    }

    #[test]
    fn has_duplicate_detects_repeats() {
        assert!(has_duplicate(&[1, 2, 3, 1]));
        assert!(!has_duplicate(&[1, 2, 3, 4]));
        assert!(!has_duplicate::<i32>(&[]));
        assert!(has_duplicate(b"aa"));
    }
}
