//! # matr
//!
//! **Dense matrix algebra with Laplace-expansion determinants.**
//!
//! matr provides a single owned [`Matrix`] type over `f64` cells, the
//! structural operations (transpose, minor extraction, sum, product, scalar
//! product) and the classical adjugate-method inversion pipeline:
//! determinant by cofactor expansion, cofactors matrix, adjugate, inverse.
//!
//! ## Design
//!
//! - **One concrete type**: there is exactly one entity, [`Matrix`], stored
//!   as a single row-major `Vec<f64>`. No views, no aliasing — every
//!   operation returns a fresh, independently owned matrix.
//! - **Explicit failure kinds**: operations that can fail return
//!   [`Result`]; a non-square input, a shape mismatch, and a singular
//!   matrix are distinct [`Error`] variants, never sentinel values that
//!   could collide with a legitimate result.
//! - **Laplace expansion, not row reduction**: determinants are computed by
//!   cofactor expansion along the first row, building the full cofactors
//!   matrix. This is exponential in the matrix size and is intended for
//!   small matrices; row-reduction is a known, deliberate non-feature.
//!
//! ## Quick Start
//!
//! ```
//! use matr::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let a = Matrix::from_rows(&[vec![2.0, 3.0], vec![5.0, 7.0]])?;
//!
//! assert_eq!(a.determinant()?, -1.0);
//!
//! let inv = a.inverse()?;
//! assert!(a.product(&inv)?.is_identity());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod matrix;
pub mod ops;

pub use error::{Error, Result};
pub use matrix::Matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
}
