use nalgebra::{DMatrix, Dim, Matrix, Scalar, Storage};

use crate::{check_square, Error};

/// Returns the minor of a square matrix: the `(n-1)x(n-1)` matrix left after deleting `row` and
/// `col`. The remaining rows and columns keep their relative order.
///
/// A 1x1 matrix yields an empty 0x0 minor.
///
/// # Errors
///
/// * `Error::InvalidShape` / `Error::EmptyMatrix` if `mat` is not a non-empty square matrix.
/// * `Error::IndexOutOfBounds` if `row` or `col` is not in `[0, n)`.
pub fn minor<T, R, C, S>(
    mat: &Matrix<T, R, C, S>,
    row: usize,
    col: usize,
) -> Result<DMatrix<T>, Error>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let order = check_square(mat.nrows(), mat.ncols())?;
    if row >= order || col >= order {
        return Err(Error::IndexOutOfBounds { row, col, order });
    }
    Ok(minor_unchecked(mat, row, col))
}

/// Does NOT check the shape or the indices.
pub(crate) fn minor_unchecked<T, R, C, S>(
    mat: &Matrix<T, R, C, S>,
    row: usize,
    col: usize,
) -> DMatrix<T>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let n = mat.nrows() - 1;
    // entries at or past the deleted row/col shift down by one
    DMatrix::from_fn(n, n, |i, j| {
        let src_i = if i < row { i } else { i + 1 };
        let src_j = if j < col { j } else { j + 1 };
        mat[(src_i, src_j)].clone()
    })
}
