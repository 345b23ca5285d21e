//! Lagrange form of the interpolating polynomial.
//!
//! For points `(x_j, y_j)`, `j = 0..n`, the unique polynomial of degree `n-1` through them is
//!
//! ```math
//! p(x) = Σ_j y_j · l_j(x),    l_j(x) = Π_{i≠j} (x - x_i) / (x_j - x_i)
//! ```
//!
//! No coefficients are ever formed; each evaluation sums the basis terms directly in O(n²).

use log::trace;
use nalgebra::{
    allocator::Allocator, DVector, DefaultAllocator, Dim, Matrix, OVector, RealField, Storage, U1,
};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Interpolating polynomial through a fixed set of points, validated once and evaluated any
/// number of times.
///
/// Deserialization goes through [`Lagrange::new`], so a deserialized interpolant satisfies the
/// same invariants as a constructed one.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(
        try_from = "LagrangePoints<T>",
        bound(deserialize = "T: Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Lagrange<T>
where
    T: RealField + Copy,
{
    x_points: DVector<T>,
    y_points: DVector<T>,
}

impl<T> Lagrange<T>
where
    T: RealField + Copy,
{
    /// Create the interpolating polynomial through `(x_points[j], y_points[j])`.
    ///
    /// # Errors
    ///
    /// * `Error::LengthMismatch` if the two sequences differ in length.
    /// * `Error::NoPoints` if they are empty.
    /// * `Error::DuplicateAbscissa` if two x-values are equal.
    pub fn new<D1, D2, S1, S2>(
        x_points: &Matrix<T, D1, U1, S1>,
        y_points: &Matrix<T, D2, U1, S2>,
    ) -> Result<Self, Error>
    where
        D1: Dim,
        D2: Dim,
        S1: Storage<T, D1>,
        S2: Storage<T, D2>,
    {
        check_points(x_points, y_points)?;
        trace!("Lagrange::new(n={})", x_points.len());

        Ok(Lagrange {
            x_points: DVector::from_iterator(x_points.len(), x_points.iter().copied()),
            y_points: DVector::from_iterator(y_points.len(), y_points.iter().copied()),
        })
    }

    /// Number of interpolation points
    pub fn len(&self) -> usize {
        self.x_points.len()
    }

    /// Always `false`, construction rejects empty point sets
    pub fn is_empty(&self) -> bool {
        self.x_points.is_empty()
    }

    /// Degree of the interpolating polynomial, one less than the number of points
    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    pub fn x_points(&self) -> &DVector<T> {
        &self.x_points
    }

    pub fn y_points(&self) -> &DVector<T> {
        &self.y_points
    }

    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: T) -> T {
        eval_unchecked(&self.x_points, &self.y_points, x)
    }

    /// Evaluate the polynomial at every entry of `xs`.
    pub fn eval_many<D, S>(&self, xs: &Matrix<T, D, U1, S>) -> OVector<T, D>
    where
        D: Dim,
        S: Storage<T, D>,
        DefaultAllocator: Allocator<T, D>,
    {
        xs.map(|x| self.eval(x))
    }
}

/// Unvalidated wire form of [`Lagrange`]
#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct LagrangePoints<T>
where
    T: nalgebra::Scalar,
{
    x_points: DVector<T>,
    y_points: DVector<T>,
}

#[cfg(feature = "serde-serialize")]
impl<T> TryFrom<LagrangePoints<T>> for Lagrange<T>
where
    T: RealField + Copy,
{
    type Error = Error;

    fn try_from(points: LagrangePoints<T>) -> Result<Self, Error> {
        Lagrange::new(&points.x_points, &points.y_points)
    }
}

/// Evaluates the Lagrange interpolating polynomial through `(x_points[j], y_points[j])` at
/// `x_target`.
///
/// Evaluating exactly at one of the `x_points[k]` returns `y_points[k]`.
///
/// # Errors
///
/// * `Error::LengthMismatch` if the two sequences differ in length.
/// * `Error::NoPoints` if they are empty.
/// * `Error::DuplicateAbscissa` if two x-values are equal.
///
/// # Example
///
/// ```
/// use interpolation::lagrange_interpolation;
/// use nalgebra::vector;
///
/// // y = x² through three points
/// let xs = vector![1.0f64, 2.0, 3.0];
/// let ys = vector![1.0f64, 4.0, 9.0];
/// let y = lagrange_interpolation(&xs, &ys, 2.5).unwrap();
/// assert!((y - 6.25).abs() < 1e-9);
/// ```
pub fn lagrange_interpolation<T, D1, D2, S1, S2>(
    x_points: &Matrix<T, D1, U1, S1>,
    y_points: &Matrix<T, D2, U1, S2>,
    x_target: T,
) -> Result<T, Error>
where
    T: RealField + Copy,
    D1: Dim,
    D2: Dim,
    S1: Storage<T, D1>,
    S2: Storage<T, D2>,
{
    check_points(x_points, y_points)?;
    Ok(eval_unchecked(x_points, y_points, x_target))
}

fn check_points<T, D1, D2, S1, S2>(
    x_points: &Matrix<T, D1, U1, S1>,
    y_points: &Matrix<T, D2, U1, S2>,
) -> Result<(), Error>
where
    T: RealField + Copy,
    D1: Dim,
    D2: Dim,
    S1: Storage<T, D1>,
    S2: Storage<T, D2>,
{
    let n = x_points.len();
    if n != y_points.len() {
        return Err(Error::LengthMismatch {
            x: n,
            y: y_points.len(),
        });
    }
    if n == 0 {
        return Err(Error::NoPoints);
    }

    // exact comparison: only an exact repeat makes x_j - x_i vanish
    for first in 0..n {
        for second in (first + 1)..n {
            if x_points[first] == x_points[second] {
                return Err(Error::DuplicateAbscissa { first, second });
            }
        }
    }

    Ok(())
}

/// Does NOT check lengths or distinct abscissas!
fn eval_unchecked<T, D1, D2, S1, S2>(
    x_points: &Matrix<T, D1, U1, S1>,
    y_points: &Matrix<T, D2, U1, S2>,
    x: T,
) -> T
where
    T: RealField + Copy,
    D1: Dim,
    D2: Dim,
    S1: Storage<T, D1>,
    S2: Storage<T, D2>,
{
    let n = x_points.len();
    let mut result = T::zero();

    for j in 0..n {
        let x_j = x_points[j];
        // y_j · l_j(x)
        let mut term = y_points[j];
        for i in (0..n).filter(|&i| i != j) {
            let x_i = x_points[i];
            term *= (x - x_i) / (x_j - x_i);
        }
        result += term;
    }

    result
}
