//! Gauss-Jordan elimination for augmented systems `[A | b]`.
//!
use log::{debug, trace};
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OVector, RealField, Scalar, Storage,
    StorageMut,
};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{constants::PIVOT_TOL, Error};

/// Outcome of a Gauss-Jordan solve.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution<T, R>
where
    T: Scalar,
    R: Dim,
    DefaultAllocator: Allocator<T, R>,
{
    /// The system has exactly one solution
    Unique(OVector<T, R>),
    /// No usable pivot was found in column `col`; the system is singular or inconsistent.
    Singular { col: usize },
}

impl<T, R> Solution<T, R>
where
    T: Scalar,
    R: Dim,
    DefaultAllocator: Allocator<T, R>,
{
    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique(_))
    }

    pub fn unique(&self) -> Option<&OVector<T, R>> {
        match self {
            Solution::Unique(x) => Some(x),
            Solution::Singular { .. } => None,
        }
    }

    pub fn into_option(self) -> Option<OVector<T, R>> {
        match self {
            Solution::Unique(x) => Some(x),
            Solution::Singular { .. } => None,
        }
    }
}

/// Gauss-Jordan solver with partial pivoting.
///
/// The solver keeps the pivot row chosen at each elimination step of the last solve, and the
/// number of row swaps that were performed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct GaussJordan<T> {
    tol: T,
    /// `pivots[k]` is the row swapped into position `k` at elimination step `k`
    pivots: Vec<usize>,
    nswaps: usize,
}

impl<T> GaussJordan<T>
where
    T: RealField + Copy,
{
    /// Creates a new solver with the default pivot tolerance [`PIVOT_TOL`].
    pub fn new() -> Self {
        Self::with_tolerance(nalgebra::convert(PIVOT_TOL))
    }

    /// Creates a new solver. Pivots with an absolute value below `tol` stop the elimination.
    pub fn with_tolerance(tol: T) -> Self {
        GaussJordan {
            tol,
            pivots: Vec::new(),
            nswaps: 0,
        }
    }

    pub fn tolerance(&self) -> T {
        self.tol
    }

    /// Pivot rows chosen during the last solve. Shorter than the system size if the last solve
    /// stopped on a singular column.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Number of row swaps performed during the last solve
    pub fn num_swaps(&self) -> usize {
        self.nswaps
    }

    /// Solves the `n x (n+1)` augmented system `mat = [A | b]` in place.
    ///
    /// On a unique solution, `mat` is left in reduced row-echelon form: the left `n x n` block is
    /// the identity and the last column holds the solution. On a singular system `mat` holds the
    /// partially reduced matrix at the column where elimination stopped.
    ///
    /// # Errors
    ///
    /// * `Error::EmptyMatrix` if `mat` has no rows.
    /// * `Error::InvalidAugmentedShape` if `mat` does not have exactly one more column than rows.
    pub fn solve_mut<R, C, S>(
        &mut self,
        mat: &mut Matrix<T, R, C, S>,
    ) -> Result<Solution<T, R>, Error>
    where
        R: Dim,
        C: Dim,
        S: StorageMut<T, R, C>,
        DefaultAllocator: Allocator<T, R>,
    {
        let (n, ncols) = mat.shape();
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }
        if ncols != n + 1 {
            return Err(Error::InvalidAugmentedShape { rows: n, cols: ncols });
        }

        self.pivots.clear();
        self.nswaps = 0;

        for i in 0..n {
            // find l = pivot row number
            let mut l = i;
            for k in (i + 1)..n {
                if mat[(k, i)].abs() > mat[(l, i)].abs() {
                    l = k;
                }
            }

            if l != i {
                mat.swap_rows(i, l);
                self.nswaps += 1;
            }

            let pivot = mat[(i, i)];
            if pivot.abs() < self.tol {
                debug!("GaussJordan::solve: no usable pivot in col {}", i);
                return Ok(Solution::Singular { col: i });
            }
            self.pivots.push(l);
            trace!("GaussJordan::solve: col {} pivot row {}", i, l);

            // normalize row i, including the right-hand side, so that a(i,i) = 1
            for j in i..=n {
                mat[(i, j)] /= pivot;
            }

            // clear column i above and below the pivot
            for k in (0..n).filter(|&k| k != i) {
                let factor = mat[(k, i)];
                if factor != T::zero() {
                    for j in i..=n {
                        let a_ij = mat[(i, j)];
                        mat[(k, j)] -= factor * a_ij;
                    }
                }
            }
        }

        Ok(Solution::Unique(mat.column(n).into_owned()))
    }

    /// Solves the augmented system `mat = [A | b]` on a copy, leaving `mat` untouched.
    ///
    /// See [`GaussJordan::solve_mut`].
    pub fn solve<R, C, S>(&mut self, mat: &Matrix<T, R, C, S>) -> Result<Solution<T, R>, Error>
    where
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
        DefaultAllocator: Allocator<T, R, C> + Allocator<T, R>,
    {
        let mut work = mat.clone_owned();
        self.solve_mut(&mut work)
    }
}

impl<T> Default for GaussJordan<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Solves the augmented system `mat = [A | b]` by Gauss-Jordan elimination with partial pivoting.
/// The input is copied; see [`gaussian_elimination_mut`] to reduce in place.
pub fn gaussian_elimination<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> Result<Solution<T, R>, Error>
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
    DefaultAllocator: Allocator<T, R, C> + Allocator<T, R>,
{
    GaussJordan::new().solve(mat)
}

/// Solves the augmented system `mat = [A | b]` in place. `mat` is overwritten by its reduced
/// row-echelon form.
pub fn gaussian_elimination_mut<T, R, C, S>(
    mat: &mut Matrix<T, R, C, S>,
) -> Result<Solution<T, R>, Error>
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: StorageMut<T, R, C>,
    DefaultAllocator: Allocator<T, R>,
{
    GaussJordan::new().solve_mut(mat)
}
