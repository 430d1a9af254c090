//! Naive dense matrix multiplication.
//!
//! Matrices are row-major `&[Vec<i64>]`. Shape problems are reported
//! through [`MatrixError`] instead of being left to slice indexing.

use std::fmt;

/// Error raised when [`matrix_multiply`] is given malformed operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The left operand's column count does not equal the right operand's
    /// row count.
    DimensionMismatch {
        /// Columns of the left matrix.
        left_cols: usize,
        /// Rows of the right matrix.
        right_rows: usize,
    },
    /// A row's length differs from its matrix's width.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Actual length of the offending row.
        got: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "incompatible dimensions: left has {left_cols} columns, right has {right_rows} rows"
            ),
            Self::RaggedRows { row, expected, got } => {
                write!(f, "ragged matrix: row {row} has {got} columns, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Multiplies two row-major matrices with the schoolbook O(n³) triple loop.
///
/// An `m x k` left operand and a `k x n` right operand produce an `m x n`
/// result. Each operand must be rectangular (every row the same length as
/// its first row) and the inner dimensions must agree.
///
/// # Errors
///
/// [`MatrixError::RaggedRows`] for a non-rectangular operand,
/// [`MatrixError::DimensionMismatch`] when the left column count differs
/// from the right row count.
///
/// # Examples
///
/// ```
/// use algokit_core::matrix_multiply;
///
/// let a = vec![vec![1, 2], vec![3, 4]];
/// let b = vec![vec![5, 6], vec![7, 8]];
/// assert_eq!(
///     matrix_multiply(&a, &b),
///     Ok(vec![vec![19, 22], vec![43, 50]])
/// );
/// ```
pub fn matrix_multiply(a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, MatrixError> {
    let a_cols = check_rectangular(a)?;
    let b_cols = check_rectangular(b)?;
    if a_cols != b.len() {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a_cols,
            right_rows: b.len(),
        });
    }
    let mut product = vec![vec![0_i64; b_cols]; a.len()];
    for i in 0..a.len() {
        for j in 0..b_cols {
            for k in 0..a_cols {
                product[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    Ok(product)
}

/// Returns the matrix's width, erring if any row deviates from it.
fn check_rectangular(matrix: &[Vec<i64>]) -> Result<usize, MatrixError> {
    let expected = matrix.first().map_or(0, Vec::len);
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != expected {
            return Err(MatrixError::RaggedRows {
                row,
                expected,
                got: values.len(),
            });
        }
    }
    Ok(expected)
}
