//! Polynomial interpolation through sample points.

use thiserror::Error;

pub mod lagrange;
pub mod linspace;

pub use lagrange::{lagrange_interpolation, Lagrange};
pub use linspace::linspace;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `x_points` and `y_points` are parallel sequences
    #[error("x_points and y_points must have the same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("At least one interpolation point is required")]
    NoPoints,

    /// The basis polynomials divide by `x_j - x_i`, so every abscissa must be distinct.
    #[error("x_points[{first}] and x_points[{second}] are equal")]
    DuplicateAbscissa { first: usize, second: usize },
}
