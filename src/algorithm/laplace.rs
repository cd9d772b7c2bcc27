//! Determinants by Laplace expansion, cofactors, adjugate, inverse
//!
//! The determinant of a matrix of size 3 or more is computed by building
//! the full cofactors matrix and expanding along the first row. Only the
//! first row of cofactors is mathematically required, and row reduction
//! would avoid the recursion entirely; both are deliberate non-features —
//! the simple algorithm is the point, and it is exponential in the matrix
//! size. Keep inputs small.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// The trace: sum of the main diagonal.
    ///
    /// Fails with [`Error::NotSquare`] for non-square input. A trace of 0
    /// is a legitimate result and is returned as `Ok(0.0)`.
    pub fn trace(&self) -> Result<f64> {
        let (height, width) = self.shape();
        if height != width {
            return Err(Error::not_square(height, width));
        }
        let mut trace = 0.0;
        for coord in 0..height {
            trace += self.at(coord, coord);
        }
        Ok(trace)
    }

    /// The determinant, by cofactor expansion along the first row.
    ///
    /// Base cases: a size-1 matrix is its single cell, a size-2 matrix is
    /// `a*d - b*c`. From size 3 up, `det = sum_j self[0][j] * cof[0][j]`
    /// over the full cofactors matrix.
    ///
    /// Fails with [`Error::NotSquare`] for non-square input. A determinant
    /// of exactly 0 is a legitimate result, not a failure.
    pub fn determinant(&self) -> Result<f64> {
        let (height, width) = self.shape();
        if height != width {
            return Err(Error::not_square(height, width));
        }

        if height == 1 {
            return Ok(self.at(0, 0));
        }
        if height == 2 {
            return Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0));
        }

        let cofactors = self.cofactors()?;
        let mut determinant = 0.0;
        for col in 0..width {
            determinant += self.at(0, col) * cofactors.at(0, col);
        }
        Ok(determinant)
    }

    /// The `(row, col)` cofactor:
    /// `(-1)^(row + col) * determinant(minor(row, col))`.
    ///
    /// Propagates the minor's failures ([`Error::TooSmall`],
    /// [`Error::IndexOutOfBounds`]).
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor_det = self.minor(row, col)?.determinant()?;
        if (row + col) % 2 == 1 {
            Ok(-minor_det)
        } else {
            Ok(minor_det)
        }
    }

    /// The cofactors matrix: same shape, cell `(i, j)` is
    /// [`cofactor(i, j)`](Matrix::cofactor).
    ///
    /// Fails with [`Error::NotSquare`] for non-square input and
    /// [`Error::TooSmall`] for size 1, which has no cofactor matrix.
    ///
    /// This is the computational hot spot: an `n x n` input takes `n*n`
    /// determinants of size `n-1`, each recursing the same way.
    pub fn cofactors(&self) -> Result<Matrix> {
        let (height, width) = self.shape();
        if height != width {
            return Err(Error::not_square(height, width));
        }
        if height < 2 {
            return Err(Error::TooSmall {
                size: height,
                min: 2,
                op: "cofactors",
            });
        }

        let mut cofactors = Matrix::zeroed(height, width);
        for row in 0..height {
            for col in 0..width {
                cofactors.put(row, col, self.cofactor(row, col)?);
            }
        }
        Ok(cofactors)
    }

    /// The adjugate: transpose of the cofactors matrix.
    ///
    /// Fails whenever [`cofactors`](Matrix::cofactors) does.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactors()?.transpose())
    }

    /// Whether this matrix has an inverse: square with non-zero
    /// determinant.
    ///
    /// Singularity is tested by exact equality with 0 — no epsilon. A
    /// determinant that merely rounds to something tiny still counts as
    /// invertible.
    pub fn is_invertible(&self) -> bool {
        match self.determinant() {
            Ok(det) => det != 0.0,
            Err(_) => false,
        }
    }

    /// The inverse, by the adjugate method:
    /// `inverse = adjugate * (1 / determinant)`.
    ///
    /// Fails with [`Error::NotSquare`] for non-square input and
    /// [`Error::Singular`] when the determinant is exactly 0. For any
    /// invertible input, `self * inverse` and `inverse * self` are the
    /// identity up to floating-point rounding.
    pub fn inverse(&self) -> Result<Matrix> {
        let determinant = self.determinant()?;
        if determinant == 0.0 {
            return Err(Error::Singular);
        }
        Ok(self.adjugate()?.scalar_product(1.0 / determinant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_of_size_one_is_the_single_cell() {
        let m = Matrix::from_rows(&[vec![42.0]]).unwrap();
        assert_eq!(m.determinant().unwrap(), 42.0);
    }

    #[test]
    fn cofactor_alternates_sign_with_position() {
        let m = Matrix::from_rows(&[
            vec![2.0, 3.0, 5.0],
            vec![7.0, 11.0, 13.0],
            vec![17.0, 19.0, 23.0],
        ])
        .unwrap();

        for row in 0..3 {
            for col in 0..3 {
                let minor_det = m.minor(row, col).unwrap().determinant().unwrap();
                let sign = if (row + col) % 2 == 1 { -1.0 } else { 1.0 };
                assert_eq!(m.cofactor(row, col).unwrap(), sign * minor_det);
            }
        }
    }

    #[test]
    fn size_one_matrix_is_invertible_but_has_no_cofactors() {
        let m = Matrix::from_rows(&[vec![2.0]]).unwrap();
        assert!(m.is_invertible());
        assert_eq!(
            m.cofactors(),
            Err(Error::TooSmall {
                size: 1,
                min: 2,
                op: "cofactors"
            })
        );
    }
}
