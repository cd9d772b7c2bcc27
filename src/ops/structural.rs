//! Transpose, minor, sum, product, scalar product

use crate::error::{Error, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// The transpose: dimensions swapped, `t[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Matrix {
        let (height, width) = self.shape();
        let mut t = Matrix::zeroed(width, height);
        for row in 0..height {
            for col in 0..width {
                t.put(col, row, self.at(row, col));
            }
        }
        t
    }

    /// The `(row, col)` minor: this matrix with row `row` and column `col`
    /// deleted, remaining rows and columns keeping their relative order.
    ///
    /// Fails with [`Error::TooSmall`] when either dimension is below 2 and
    /// [`Error::IndexOutOfBounds`] when `row` or `col` is outside the
    /// matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let (height, width) = self.shape();
        if height < 2 || width < 2 {
            return Err(Error::TooSmall {
                size: height.min(width),
                min: 2,
                op: "minor",
            });
        }
        if row >= height || col >= width {
            return Err(Error::out_of_bounds(row, col, height, width));
        }

        let mut minor = Matrix::zeroed(height - 1, width - 1);
        let mut dest_row = 0;
        for source_row in 0..height {
            if source_row == row {
                continue;
            }
            let mut dest_col = 0;
            for source_col in 0..width {
                if source_col == col {
                    continue;
                }
                minor.put(dest_row, dest_col, self.at(source_row, source_col));
                dest_col += 1;
            }
            dest_row += 1;
        }
        Ok(minor)
    }

    /// Elementwise sum with `other`.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless both dimensions agree.
    pub fn sum(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        let mut result = self.clone();
        for row in 0..self.height() {
            for col in 0..self.width() {
                result.put(row, col, self.at(row, col) + other.at(row, col));
            }
        }
        Ok(result)
    }

    /// The matrix product `self * other`.
    ///
    /// For `self` of shape `m x n` and `other` of shape `n x p` the result
    /// has shape `m x p` with `cell(i, j) = sum_k self[i][k] * other[k][j]`.
    /// The product does not commute.
    ///
    /// Fails with [`Error::IncompatibleProduct`] when
    /// `self.width() != other.height()`.
    pub fn product(&self, other: &Matrix) -> Result<Matrix> {
        if self.width() != other.height() {
            return Err(Error::IncompatibleProduct {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = Matrix::zeroed(self.height(), other.width());
        for i in 0..self.height() {
            for j in 0..other.width() {
                let mut acc = 0.0;
                for k in 0..self.width() {
                    acc += self.at(i, k) * other.at(k, j);
                }
                result.put(i, j, acc);
            }
        }
        Ok(result)
    }

    /// Every cell multiplied by `scalar`, as a new matrix. Never mutates
    /// the input.
    pub fn scalar_product(&self, scalar: f64) -> Matrix {
        let mut result = self.clone();
        for row in 0..self.height() {
            for col in 0..self.width() {
                result.put(row, col, scalar * self.at(row, col));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_drops_the_requested_row_and_column() {
        let m = Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();

        let minor = m.minor(1, 0).unwrap();
        assert_eq!(minor.shape(), (2, 2));
        assert_eq!(minor.as_slice(), &[2.0, 3.0, 8.0, 9.0]);
    }

    #[test]
    fn minor_requires_size_at_least_two() {
        let m = Matrix::from_rows(&[vec![1.0]]).unwrap();
        assert_eq!(
            m.minor(0, 0),
            Err(Error::TooSmall {
                size: 1,
                min: 2,
                op: "minor"
            })
        );
    }

    #[test]
    fn minor_checks_bounds() {
        let m = Matrix::zeros(2, 2).unwrap();
        assert_eq!(m.minor(2, 0), Err(Error::out_of_bounds(2, 0, 2, 2)));
    }
}
