//! Core Matrix type

use crate::error::{Error, Result};

/// Dense rectangular matrix of `f64` cells
///
/// `Matrix` is the fundamental (and only) data structure in matr. It owns a
/// single row-major buffer of exactly `height * width` cells; both
/// dimensions are at least 1 for any successfully constructed matrix.
///
/// Cells are addressed as `(row, column)` with zero-based indices. Cloning
/// produces a deep copy with independent storage; no two matrices ever
/// share a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    /// Row-major cell buffer, `height * width` long
    cells: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled `height x width` matrix.
    ///
    /// Fails with [`Error::ZeroDimension`] when either dimension is 0.
    pub fn zeros(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::ZeroDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![0.0; height * width],
        })
    }

    /// Create the `size x size` identity matrix: 1s on the main diagonal,
    /// 0s everywhere else.
    ///
    /// Fails with [`Error::ZeroDimension`] when `size` is 0.
    pub fn identity(size: usize) -> Result<Self> {
        let mut id = Self::zeros(size, size)?;
        for coord in 0..size {
            id.cells[coord * size + coord] = 1.0;
        }
        Ok(id)
    }

    /// Create a matrix from rows, top to bottom.
    ///
    /// The row count and row length determine the dimensions. Fails with
    /// [`Error::ZeroDimension`] when `rows` is empty or the first row is,
    /// and with [`Error::JaggedInput`] when any row's length differs from
    /// the first row's.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(Error::ZeroDimension { height, width });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::JaggedInput {
                    index,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Create a matrix from columns, left to right.
    ///
    /// The column count and column length determine the dimensions. Same
    /// validation as [`Matrix::from_rows`].
    pub fn from_columns<C: AsRef<[f64]>>(columns: &[C]) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, |col| col.as_ref().len());
        if height == 0 || width == 0 {
            return Err(Error::ZeroDimension { height, width });
        }

        let mut matrix = Self::zeros(height, width)?;
        for (index, column) in columns.iter().enumerate() {
            let column = column.as_ref();
            if column.len() != height {
                return Err(Error::JaggedInput {
                    index,
                    expected: height,
                    got: column.len(),
                });
            }
            for (row, &value) in column.iter().enumerate() {
                matrix.cells[row * width + index] = value;
            }
        }

        Ok(matrix)
    }

    /// Create a matrix from a row-major slice of `height * width` values.
    ///
    /// Fails with [`Error::ZeroDimension`] on a zero dimension and
    /// [`Error::ShapeMismatch`] when `data.len() != height * width`.
    pub fn from_slice(data: &[f64], height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::ZeroDimension { height, width });
        }
        if data.len() != height * width {
            return Err(Error::shape_mismatch(
                (height, width),
                (data.len() / width, width),
            ));
        }
        Ok(Self {
            height,
            width,
            cells: data.to_vec(),
        })
    }

    /// Row count.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Column count.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Dimensions as `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Whether `height == width`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// The cell at `(row, col)`, or [`Error::IndexOutOfBounds`].
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.width + col])
    }

    /// Store `value` at `(row, col)`, or [`Error::IndexOutOfBounds`].
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row * self.width + col] = value;
        Ok(())
    }

    /// Read-only view of the row-major cell buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Whether this is an identity matrix: square, 1s on the main diagonal,
    /// 0s everywhere else. Exact comparison, no tolerance.
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for row in 0..self.height {
            for col in 0..self.width {
                let expected = if row == col { 1.0 } else { 0.0 };
                if self.cells[row * self.width + col] != expected {
                    return false;
                }
            }
        }
        true
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::out_of_bounds(row, col, self.height, self.width));
        }
        Ok(())
    }

    /// Zero-filled matrix for operation results; callers guarantee positive
    /// dimensions.
    pub(crate) fn zeroed(height: usize, width: usize) -> Matrix {
        debug_assert!(height > 0 && width > 0);
        Self {
            height,
            width,
            cells: vec![0.0; height * width],
        }
    }

    /// Unchecked cell read; callers guarantee bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.width + col]
    }

    /// Unchecked cell write; callers guarantee bounds.
    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.width + col] = value;
    }
}
