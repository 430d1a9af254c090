//! Comparison sorts: the quadratic classics, two merge-sort variants, three
//! quicksort variants, and heapsort.
//!
//! Every in-place sort takes `&mut [T]` and orders ascending by `Ord`. The
//! Hoare-partition quicksorts and the merge sorts additionally require
//! `Clone` because they copy the pivot value or merge through a buffer.
//!
//! On the quicksort variants: [`quicksort_lomuto`] (last-element pivot) and
//! [`quicksort_hoare`] (first-element pivot) degrade to O(n²) on sorted
//! input; [`quicksort`] picks the median of first/middle/last, which keeps
//! pre-sorted and reverse-sorted input on the O(n log n) path. Recursion
//! depth matches partition depth, so only the median-of-three variant
//! should be given large adversarial input.

// ---------------------------------------------------------------------------
// Quadratic sorts
// ---------------------------------------------------------------------------

/// Insertion sort: stable, in-place, O(n²). Efficient on small or nearly
/// sorted input.
///
/// # Examples
///
/// ```
/// use algokit_core::insertion_sort;
///
/// let mut values = [5, 3, 1, 4, 2];
/// insertion_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Selection sort: in-place, O(n²). Repeatedly moves the minimum of the
/// unsorted suffix to its final position.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut min_idx = i;
        for j in i + 1..items.len() {
            if items[j] < items[min_idx] {
                min_idx = j;
            }
        }
        items.swap(i, min_idx);
    }
}

// ---------------------------------------------------------------------------
// Merge sorts
// ---------------------------------------------------------------------------

/// Merge sort returning a new sorted vector: stable, O(n log n), allocating
/// a fresh vector per merge.
///
/// # Examples
///
/// ```
/// use algokit_core::merge_sort;
///
/// assert_eq!(merge_sort(&[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() < 2 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(&left, &right)
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        // `<=` keeps equal elements in left-then-right order (stability).
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend(left[i..].iter().cloned());
    merged.extend(right[j..].iter().cloned());
    merged
}

/// Merge sort over a mutable slice: stable, O(n log n), reusing a single
/// auxiliary buffer across all merges instead of allocating per merge.
pub fn merge_sort_in_place<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mut aux = items.to_vec();
    let high = items.len() - 1;
    merge_sort_range(items, &mut aux, 0, high);
}

fn merge_sort_range<T: Ord + Clone>(items: &mut [T], aux: &mut [T], low: usize, high: usize) {
    if low < high {
        let mid = low + (high - low) / 2;
        merge_sort_range(items, aux, low, mid);
        merge_sort_range(items, aux, mid + 1, high);
        merge_into(items, aux, low, mid, high);
    }
}

fn merge_into<T: Ord + Clone>(items: &mut [T], aux: &mut [T], low: usize, mid: usize, high: usize) {
    let mut i = low;
    let mut j = mid + 1;
    let mut k = low;
    while i <= mid && j <= high {
        if items[i] <= items[j] {
            aux[k] = items[i].clone();
            i += 1;
        } else {
            aux[k] = items[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i <= mid {
        aux[k] = items[i].clone();
        i += 1;
        k += 1;
    }
    while j <= high {
        aux[k] = items[j].clone();
        j += 1;
        k += 1;
    }
    items[low..=high].clone_from_slice(&aux[low..=high]);
}

// ---------------------------------------------------------------------------
// Quicksorts
// ---------------------------------------------------------------------------

/// Quicksort with Lomuto partitioning (last element as pivot): in-place,
/// O(n log n) average, O(n²) on sorted input.
pub fn quicksort_lomuto<T: Ord>(items: &mut [T]) {
    if items.len() > 1 {
        lomuto_range(items, 0, items.len() - 1);
    }
}

fn lomuto_range<T: Ord>(items: &mut [T], low: usize, high: usize) {
    if low < high {
        let p = lomuto_partition(items, low, high);
        if p > low {
            lomuto_range(items, low, p - 1);
        }
        lomuto_range(items, p + 1, high);
    }
}

fn lomuto_partition<T: Ord>(items: &mut [T], low: usize, high: usize) -> usize {
    let mut i = low;
    for j in low..high {
        if items[j] < items[high] {
            items.swap(i, j);
            i += 1;
        }
    }
    items.swap(i, high);
    i
}

/// Quicksort with Hoare partitioning (first element as pivot): in-place,
/// O(n log n) average with roughly a third of Lomuto's swaps, O(n²) on
/// sorted input.
pub fn quicksort_hoare<T: Ord + Clone>(items: &mut [T]) {
    if items.len() > 1 {
        hoare_range(items, 0, items.len() - 1);
    }
}

fn hoare_range<T: Ord + Clone>(items: &mut [T], low: usize, high: usize) {
    if low < high {
        let p = hoare_partition(items, low, high);
        // Hoare's split point may still hold elements equal to the pivot on
        // both sides: recurse on [low, p] and [p+1, high], not around p.
        hoare_range(items, low, p);
        hoare_range(items, p + 1, high);
    }
}

fn hoare_partition<T: Ord + Clone>(items: &mut [T], low: usize, high: usize) -> usize {
    let pivot = items[low].clone();
    let mut i = low;
    let mut j = high;
    loop {
        while items[i] < pivot {
            i += 1;
        }
        while items[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        items.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Quicksort with Hoare partitioning and median-of-three pivot selection:
/// in-place, O(n log n) average, and resistant to the O(n²) degradation the
/// plain variants exhibit on pre-sorted or reverse-sorted input.
///
/// # Examples
///
/// ```
/// use algokit_core::quicksort;
///
/// let mut values: Vec<i64> = (0..1000).collect();
/// quicksort(&mut values);
/// assert!(values.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn quicksort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() > 1 {
        median_range(items, 0, items.len() - 1);
    }
}

fn median_range<T: Ord + Clone>(items: &mut [T], low: usize, high: usize) {
    if low < high {
        let p = median_of_three_partition(items, low, high);
        median_range(items, low, p);
        median_range(items, p + 1, high);
    }
}

/// Sorts `items[low]`, the middle element, and `items[high]` among
/// themselves, moves the median into the pivot slot at `low`, then runs a
/// Hoare partition.
fn median_of_three_partition<T: Ord + Clone>(items: &mut [T], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;
    if items[low] > items[mid] {
        items.swap(low, mid);
    }
    if items[low] > items[high] {
        items.swap(low, high);
    }
    if items[mid] > items[high] {
        items.swap(mid, high);
    }
    items.swap(low, mid);
    hoare_partition(items, low, high)
}

// ---------------------------------------------------------------------------
// Heapsort
// ---------------------------------------------------------------------------

/// Restores the max-heap property for the subtree rooted at `root`,
/// assuming both of its child subtrees are already max-heaps.
///
/// The heap occupies the whole slice: element `i` has children `2i + 1` and
/// `2i + 2`. The sift-down recursion is bounded by the heap height,
/// O(log n).
pub fn max_heapify<T: Ord>(heap: &mut [T], root: usize) {
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;
    if left < heap.len() && heap[left] > heap[largest] {
        largest = left;
    }
    if right < heap.len() && heap[right] > heap[largest] {
        largest = right;
    }
    if largest != root {
        heap.swap(root, largest);
        max_heapify(heap, largest);
    }
}

/// Heapsort: in-place, O(n log n) worst case. Builds a max-heap bottom-up,
/// then repeatedly swaps the root behind the shrinking heap boundary.
pub fn heapsort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for i in (0..n / 2).rev() {
        max_heapify(items, i);
    }
    for end in (1..n).rev() {
        items.swap(0, end);
        max_heapify(&mut items[..end], 0);
    }
}
