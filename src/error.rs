//! Error types for matr

use thiserror::Error;

/// Result type alias using matr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matr operations
///
/// Every failure kind is a distinct variant, so a legitimate computed value
/// (e.g. a determinant of exactly 0) can never be confused with a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A matrix dimension is zero
    #[error("Matrix dimensions must be positive, got {height}x{width}")]
    ZeroDimension {
        /// Requested row count
        height: usize,
        /// Requested column count
        width: usize,
    },

    /// Operand shapes differ where identical shapes are required
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected (height, width)
        expected: (usize, usize),
        /// Actual (height, width)
        got: (usize, usize),
    },

    /// Inner dimensions are incompatible for a matrix product
    #[error("Incompatible product: left is {left:?} but right is {right:?} (left width must equal right height)")]
    IncompatibleProduct {
        /// Left operand (height, width)
        left: (usize, usize),
        /// Right operand (height, width)
        right: (usize, usize),
    },

    /// A square matrix is required
    #[error("Expected a square matrix, got {height}x{width}")]
    NotSquare {
        /// Row count
        height: usize,
        /// Column count
        width: usize,
    },

    /// The matrix is below the minimum size for an operation
    #[error("Matrix of size {size} is too small for {op}, minimum is {min}")]
    TooSmall {
        /// Actual size
        size: usize,
        /// Minimum required size
        min: usize,
        /// The operation name
        op: &'static str,
    },

    /// Cell index outside the matrix bounds
    #[error("Index ({row}, {col}) out of bounds for {height}x{width} matrix")]
    IndexOutOfBounds {
        /// The requested row
        row: usize,
        /// The requested column
        col: usize,
        /// Row count
        height: usize,
        /// Column count
        width: usize,
    },

    /// Row or column sequences of inconsistent length passed to a constructor
    #[error("Sequence {index} has {got} values, expected {expected}")]
    JaggedInput {
        /// Index of the offending row/column
        index: usize,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// The matrix has determinant 0 and cannot be inverted
    #[error("Matrix is singular: determinant is zero")]
    Singular,
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Create a not-square error
    pub fn not_square(height: usize, width: usize) -> Self {
        Self::NotSquare { height, width }
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self::IndexOutOfBounds {
            row,
            col,
            height,
            width,
        }
    }
}
