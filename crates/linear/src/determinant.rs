//! Determinants by cofactor expansion and by Gaussian elimination.
//!
use log::{debug, trace};
use nalgebra::{DMatrix, Dim, Matrix, RealField, Storage};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{
    check_square, constants::PIVOT_TOL, minor::minor_unchecked, Determinant, DeterminantMethod,
    Error,
};

/// Textbook determinant by cofactor expansion along the first row.
///
/// Runs in O(n!) time, so it is only practical for small matrices. See [`Elimination`] for the
/// O(n³) method.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Cofactor;

impl<T> Determinant<T> for Cofactor
where
    T: RealField + Copy,
{
    fn get_method(&self) -> DeterminantMethod {
        DeterminantMethod::Cofactor
    }

    fn determinant<R, C, S>(&self, mat: &Matrix<T, R, C, S>) -> Result<T, Error>
    where
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
    {
        let n = check_square(mat.nrows(), mat.ncols())?;
        trace!("Cofactor::determinant(n={})", n);
        Ok(cofactor_expansion(mat))
    }
}

/// Determinant by reduction to upper-triangular form with partial pivoting.
///
/// The determinant is the product of the pivots, negated once per row swap. A pivot with an
/// absolute value below `tol` marks the matrix as singular and the determinant is reported as
/// exactly zero.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Elimination<T> {
    tol: T,
}

impl<T> Elimination<T>
where
    T: RealField + Copy,
{
    /// Creates a new elimination determinant with the default pivot tolerance
    pub fn new() -> Self {
        Self::with_tolerance(nalgebra::convert(PIVOT_TOL))
    }

    pub fn with_tolerance(tol: T) -> Self {
        Elimination { tol }
    }

    pub fn tolerance(&self) -> T {
        self.tol
    }
}

impl<T> Default for Elimination<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Determinant<T> for Elimination<T>
where
    T: RealField + Copy,
{
    fn get_method(&self) -> DeterminantMethod {
        DeterminantMethod::Elimination
    }

    fn determinant<R, C, S>(&self, mat: &Matrix<T, R, C, S>) -> Result<T, Error>
    where
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
    {
        let n = check_square(mat.nrows(), mat.ncols())?;

        // work on a copy, the caller's matrix is left alone
        let mut work = DMatrix::from_fn(n, n, |i, j| mat[(i, j)]);
        let mut det = T::one();

        for i in 0..n {
            // find the pivot row for column i
            let mut max_row = i;
            for k in (i + 1)..n {
                if work[(k, i)].abs() > work[(max_row, i)].abs() {
                    max_row = k;
                }
            }

            if work[(max_row, i)].abs() < self.tol {
                debug!("Elimination::determinant: singular at col {}", i);
                return Ok(T::zero());
            }

            // each row swap flips the sign
            if max_row != i {
                work.swap_rows(i, max_row);
                det = -det;
            }

            let pivot = work[(i, i)];
            trace!("Elimination::determinant: col {} pivot row {}", i, max_row);
            det *= pivot;

            // entries left of column i are already zero
            for k in (i + 1)..n {
                let factor = work[(k, i)] / pivot;
                if factor != T::zero() {
                    for j in i..n {
                        let a_ij = work[(i, j)];
                        work[(k, j)] -= factor * a_ij;
                    }
                }
            }
        }

        Ok(det)
    }
}

/// Computes the determinant of a square matrix by cofactor expansion along the first row.
///
/// # Errors
///
/// * `Error::InvalidShape` if `mat` is not square.
/// * `Error::EmptyMatrix` if `mat` has no rows.
pub fn determinant_recursive<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> Result<T, Error>
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    Cofactor.determinant(mat)
}

/// Computes the determinant of a square matrix by Gaussian elimination with partial pivoting,
/// using the default pivot tolerance [`PIVOT_TOL`].
///
/// # Errors
///
/// * `Error::InvalidShape` if `mat` is not square.
/// * `Error::EmptyMatrix` if `mat` has no rows.
pub fn determinant_gauss<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> Result<T, Error>
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    Elimination::new().determinant(mat)
}

/// Does NOT check for a non-empty square matrix!
fn cofactor_expansion<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> T
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    match mat.nrows() {
        1 => mat[(0, 0)],
        2 => mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)],
        n => {
            let mut det = T::zero();
            // (-1)^col, starting at +1 for column 0
            let mut sign = T::one();
            for col in 0..n {
                let sub = minor_unchecked(mat, 0, col);
                det += sign * mat[(0, col)] * cofactor_expansion(&sub);
                sign = -sign;
            }
            det
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, matrix, DMatrix, Matrix3};

    use super::*;

    #[test]
    fn test_recursive_2x2() {
        let mat = matrix![
            4.0, 3.0;
            2.0, 1.0;
        ];
        assert_eq!(determinant_recursive(&mat).unwrap(), -2.0);
    }

    #[test]
    fn test_recursive_singular_3x3() {
        let mat = matrix![
            1.0, 2.0, 3.0;
            4.0, 5.0, 6.0;
            7.0, 8.0, 9.0;
        ];
        assert_eq!(determinant_recursive(&mat).unwrap(), 0.0);
    }

    #[test]
    fn test_recursive_3x3() {
        let mat = matrix![
            6.0, 1.0, 1.0;
            4.0, -2.0, 5.0;
            2.0, 8.0, 7.0;
        ];
        assert_eq!(determinant_recursive(&mat).unwrap(), -306.0);
    }

    #[test]
    fn test_recursive_1x1() {
        assert_eq!(determinant_recursive(&matrix![-7.5]).unwrap(), -7.5);
    }

    #[test]
    fn test_recursive_4x4() {
        let mat = matrix![
            5.0, 0.0, 0.0, 1.0;
            2.0, 2.0, 2.0, 1.0;
            4.0, 5.0, 5.0, 5.0;
            1.0, 6.0, 4.0, 5.0;
        ];
        assert_relative_eq!(
            determinant_recursive(&mat).unwrap(),
            mat.determinant(),
            max_relative = 1e-10
        );
    }

    #[test_log::test]
    fn test_gauss_3x3() {
        let mat = matrix![
            2.0, 1.0, 1.0;
            4.0, -6.0, 0.0;
            -2.0, 7.0, 2.0;
        ];
        assert_relative_eq!(determinant_gauss(&mat).unwrap(), -16.0, max_relative = 1e-12);
    }

    #[test_log::test]
    fn test_gauss_singular_is_exact_zero() {
        let mat = matrix![
            1.0, 2.0, 3.0;
            4.0, 5.0, 6.0;
            7.0, 8.0, 9.0;
        ];
        assert_eq!(determinant_gauss(&mat).unwrap(), 0.0);

        let zero_col = matrix![
            0.0, 1.0;
            0.0, 2.0;
        ];
        assert_eq!(determinant_gauss(&zero_col).unwrap(), 0.0);
    }

    #[test]
    fn test_gauss_needs_pivoting() {
        // zero in the leading position forces a row swap
        let mat = matrix![
            0.0, 1.0;
            1.0, 0.0;
        ];
        assert_eq!(determinant_gauss(&mat).unwrap(), -1.0);
    }

    #[test]
    fn test_gauss_leaves_input_untouched() {
        let mat = dmatrix![
            0.0, 2.0, 1.0;
            3.0, 1.0, 4.0;
            1.0, 5.0, 9.0;
        ];
        let copy = mat.clone();
        determinant_gauss(&mat).unwrap();
        assert_eq!(mat, copy);
    }

    #[test]
    fn test_custom_tolerance() {
        let mat = matrix![
            1e-6, 0.0;
            0.0, 1e-6;
        ];
        assert_relative_eq!(determinant_gauss(&mat).unwrap(), 1e-12);
        assert_eq!(Elimination::with_tolerance(1e-3).determinant(&mat).unwrap(), 0.0);
    }

    #[test]
    fn test_methods_agree() {
        let mat = Matrix3::new(2.0, -1.0, 0.5, 3.0, 4.0, -2.0, 1.5, 0.0, 6.0);
        let cofactor = Cofactor.determinant(&mat).unwrap();
        let elimination = Elimination::default().determinant(&mat).unwrap();
        assert_relative_eq!(cofactor, elimination, max_relative = 1e-12);
        assert_relative_eq!(cofactor, mat.determinant(), max_relative = 1e-12);
    }

    #[test]
    fn test_get_method() {
        assert_eq!(
            Determinant::<f64>::get_method(&Cofactor),
            DeterminantMethod::Cofactor
        );
        assert_eq!(
            Elimination::<f64>::new().get_method(),
            DeterminantMethod::Elimination
        );
    }

    #[test]
    fn test_non_square() {
        let mat = matrix![
            1.0, 2.0, 3.0;
            4.0, 5.0, 6.0;
        ];
        let expected = Err(Error::InvalidShape { rows: 2, cols: 3 });
        assert_eq!(determinant_recursive(&mat), expected);
        assert_eq!(determinant_gauss(&mat), expected);
    }

    #[test]
    fn test_empty() {
        let mat = DMatrix::<f64>::zeros(0, 0);
        assert_eq!(determinant_recursive(&mat), Err(Error::EmptyMatrix));
        assert_eq!(determinant_gauss(&mat), Err(Error::EmptyMatrix));
    }
}
