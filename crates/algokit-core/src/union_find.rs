//! Union-find (disjoint set) over a fixed universe of integer labels.
//!
//! [`DisjointSet::find`] applies full path compression: after locating the
//! root it repoints every node visited on the way up directly at that root,
//! in a second iterative pass (no recursion, so adversarially deep trees
//! cannot exhaust the stack). [`DisjointSet::union`] is weighted by subtree
//! size; the smaller tree is attached under the larger one, which bounds
//! tree height at O(log n) on its own and yields the inverse-Ackermann
//! amortized bound per operation together with compression.
//!
//! Labels outside `[0, n)` are rejected with [`UnionFindError`] rather than
//! panicking on a slice index.

use std::fmt;

/// Error raised when a label passed to a [`DisjointSet`] operation does not
/// belong to the structure's universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnionFindError {
    /// The label is not in `[0, len)`.
    LabelOutOfRange {
        /// The offending label.
        label: usize,
        /// Number of elements in the structure.
        len: usize,
    },
}

impl fmt::Display for UnionFindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LabelOutOfRange { label, len } => {
                write!(f, "label {label} out of range for {len} elements")
            }
        }
    }
}

impl std::error::Error for UnionFindError {}

/// A weighted union-find (disjoint set) structure with path compression.
///
/// Maintains a partition of `n` elements, labeled `0..n`, into disjoint
/// sets. Each set is a rooted tree stored in a `parent` vector; `size[r]`
/// holds the exact element count of the set rooted at `r` (it is only
/// meaningful while `r` is a root).
///
/// # Determinism
///
/// When two sets of equal size are merged, the root of the set containing
/// the **first** argument to [`DisjointSet::union`] survives. Repeated runs
/// over the same operation sequence therefore report identical
/// representatives.
///
/// # Examples
///
/// ```
/// use algokit_core::DisjointSet;
///
/// let mut dsu = DisjointSet::new(5);
/// assert_eq!(dsu.union(0, 1), Ok(true));
/// assert_eq!(dsu.union(2, 3), Ok(true));
/// assert_eq!(dsu.union(0, 2), Ok(true));
/// assert_eq!(dsu.connected(1, 3), Ok(true));
/// assert_eq!(dsu.connected(1, 4), Ok(false));
/// assert_eq!(dsu.union(0, 1), Ok(false));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates a new `DisjointSet` with `n` singleton sets.
    ///
    /// Each element `i` is initially its own representative
    /// (`parent[i] == i`, `size[i] == 1`). `n == 0` yields an empty
    /// structure on which every labeled operation fails.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Walks the parent chain to the root, then repoints every visited node
    /// directly at that root (full path compression). The compression write
    /// is why this takes `&mut self` even though no externally observable
    /// state changes.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::LabelOutOfRange`] if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        self.check(x)?;
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `Ok(true)` if the two elements were in different sets before
    /// the call (a merge occurred), `Ok(false)` if they already shared a
    /// set (no mutation). The smaller set's root is attached under the
    /// larger set's root; on equal sizes the first argument's root
    /// survives.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::LabelOutOfRange`] if either label is out of range;
    /// no mutation occurs in that case.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        self.check(y)?;
        let mut root_x = self.find(x)?;
        let mut root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are currently in the same set.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::LabelOutOfRange`] if either label is out of range.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the exact number of elements in the set containing `x`.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::LabelOutOfRange`] if `x` is out of range.
    pub fn set_size(&mut self, x: usize) -> Result<usize, UnionFindError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Returns the number of elements in this `DisjointSet`.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if this `DisjointSet` contains no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, label: usize) -> Result<(), UnionFindError> {
        if label < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::LabelOutOfRange {
                label,
                len: self.parent.len(),
            })
        }
    }
}
