//! Common test utilities
#![allow(dead_code)]

use matr::Matrix;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert a matrix holds exactly the given row-major cells
pub fn assert_cells_eq(matrix: &Matrix, expected: &[f64], msg: &str) {
    assert_eq!(
        matrix.as_slice(),
        expected,
        "{}: cells differ (shape {:?})",
        msg,
        matrix.shape()
    );
}
