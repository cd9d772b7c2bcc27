//! Diagnostic rendering of matrix contents

use super::Matrix;
use std::fmt;

/// Renders rows on separate lines, cells tab-separated with two decimals.
///
/// This is a diagnostic dump, not part of the algebraic contract; use it
/// for logging and debugging small matrices.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width() {
                if col > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{:.2}", self.at(row, col))?;
            }
        }
        Ok(())
    }
}
