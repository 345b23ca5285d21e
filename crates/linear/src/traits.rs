use nalgebra::{Dim, Matrix, RealField, Storage};

use crate::{DeterminantMethod, Error};

pub trait Determinant<T>
where
    T: RealField + Copy,
{
    fn get_method(&self) -> DeterminantMethod;

    /// Computes the determinant of a square matrix.
    ///
    /// The caller's matrix is never modified; methods that reduce the matrix work on an internal
    /// copy.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidShape` if `mat` is not square.
    /// * `Error::EmptyMatrix` if `mat` has no rows.
    ///
    /// A singular matrix is not an error: the determinant is zero (or within floating point
    /// noise of zero for methods that do not apply a pivot tolerance).
    fn determinant<R, C, S>(&self, mat: &Matrix<T, R, C, S>) -> Result<T, Error>
    where
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>;
}
