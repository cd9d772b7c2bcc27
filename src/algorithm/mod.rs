//! Linear algebra algorithms
//!
//! The Laplace engine: determinant by cofactor expansion and the
//! adjugate-method inversion pipeline built on top of it. These are pure
//! functions over [`crate::Matrix`]; the recursion of `determinant` through
//! `cofactors`, `cofactor`, and `minor` is the whole control structure.

mod laplace;
