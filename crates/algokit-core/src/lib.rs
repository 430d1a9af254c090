#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod grid;
pub mod matrix;
pub mod patterns;
pub mod search;
pub mod sort;
pub mod union_find;

pub use grid::{count_islands, shortest_path};
pub use matrix::{MatrixError, matrix_multiply};
pub use patterns::{
    count_frequencies, count_subarrays_with_sum, has_duplicate, longest_distinct_window,
    max_subarray, max_sum_window, two_sum_sorted,
};
pub use search::{binary_search, binary_search_recursive, linear_search, min_feasible};
pub use sort::{
    heapsort, insertion_sort, max_heapify, merge_sort, merge_sort_in_place, quicksort,
    quicksort_hoare, quicksort_lomuto, selection_sort,
};
pub use union_find::{DisjointSet, UnionFindError};
