use nalgebra::{DVector, RealField};
use num_traits::Float;

/// Returns `num` evenly spaced samples over `[start, end]`, both endpoints included.
///
/// `num == 0` gives an empty vector and `num == 1` gives `[start]`.
pub fn linspace<T>(start: T, end: T, num: usize) -> DVector<T>
where
    T: RealField + Float,
{
    DVector::from_iterator(num, itertools_num::linspace(start, end, num))
}
