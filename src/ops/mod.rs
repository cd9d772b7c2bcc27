//! Structural operations on matrices
//!
//! Transpose, minor extraction, sum, product, and scalar product. Each
//! operation produces a new, independently owned [`crate::Matrix`]; inputs
//! are never mutated.

mod structural;
