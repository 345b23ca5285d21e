//! Dense determinants and Gauss-Jordan elimination over `nalgebra` matrices.
//!
//! Two independent determinant methods are provided, cofactor expansion ([`Cofactor`]) and
//! row-echelon reduction with partial pivoting ([`Elimination`]), together with a Gauss-Jordan
//! solver ([`GaussJordan`]) for augmented systems `[A | b]`.

pub mod constants;
mod determinant;
mod gauss_jordan;
mod minor;
mod traits;

pub use determinant::{determinant_gauss, determinant_recursive, Cofactor, Elimination};
pub use gauss_jordan::{gaussian_elimination, gaussian_elimination_mut, GaussJordan, Solution};
pub use minor::minor;
pub use traits::Determinant;

use thiserror::Error;

/// Shape errors. Singular matrices are not errors, see [`Solution::Singular`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A determinant or minor was requested for a non-square matrix
    #[error("Matrix must be square, got {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    /// An augmented system `[A | b]` must be `n x (n+1)`
    #[error("Augmented matrix must have one more column than rows, got {rows}x{cols}")]
    InvalidAugmentedShape { rows: usize, cols: usize },

    #[error("Matrix has no entries")]
    EmptyMatrix,

    /// Minor row or column index outside `[0, order)`
    #[error("Index ({row}, {col}) is out of bounds for a matrix of order {order}")]
    IndexOutOfBounds { row: usize, col: usize, order: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeterminantMethod {
    /// Cofactor expansion along the first row, O(n!)
    Cofactor,
    /// Reduction to upper-triangular form with partial pivoting, O(n³)
    Elimination,
}

/// Checks that an `nrows` x `ncols` matrix is square and non-empty, returning its order.
pub(crate) fn check_square(nrows: usize, ncols: usize) -> Result<usize, Error> {
    if nrows != ncols {
        return Err(Error::InvalidShape {
            rows: nrows,
            cols: ncols,
        });
    }
    if nrows == 0 {
        return Err(Error::EmptyMatrix);
    }
    Ok(nrows)
}
