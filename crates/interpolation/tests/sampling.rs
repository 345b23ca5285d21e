//! Sampling an interpolant over a dense grid, the way a plot of it would.

use approx::assert_relative_eq;
use interpolation::{lagrange_interpolation, linspace, Error, Lagrange};
use nalgebra::{dvector, vector};

#[test]
fn sample_parabola_over_grid() {
    let xs = vector![1.0, 2.0, 3.0];
    let ys = vector![1.0, 4.0, 9.0];
    let poly = Lagrange::new(&xs, &ys).unwrap();

    let grid = linspace(0.0, 4.0, 100);
    let samples = poly.eval_many(&grid);

    assert_eq!(samples.len(), grid.len());
    for (x, y) in grid.iter().zip(samples.iter()) {
        assert_relative_eq!(*y, x * x, epsilon = 1e-9);
    }
}

#[test]
fn interpolant_of_line_stays_linear() {
    let xs = dvector![-2.0, 0.0, 5.0, 9.0];
    let ys = xs.map(|x| 3.0 * x - 1.0);

    for x in linspace(-10.0, 10.0, 21).iter() {
        let y = lagrange_interpolation(&xs, &ys, *x).unwrap();
        assert_relative_eq!(y, 3.0 * x - 1.0, epsilon = 1e-9);
    }
}

#[test]
fn works_for_f32() {
    let xs = vector![0.0f32, 1.0, 2.0];
    let ys = vector![1.0f32, 3.0, 5.0];
    let y = lagrange_interpolation(&xs, &ys, 1.5).unwrap();
    assert_relative_eq!(y, 4.0f32, epsilon = 1e-5);
}

#[test]
fn rejects_bad_points() {
    assert_eq!(
        Lagrange::new(&vector![0.0, 0.0], &vector![1.0, 2.0]),
        Err(Error::DuplicateAbscissa {
            first: 0,
            second: 1
        })
    );
    assert_eq!(
        Lagrange::new(&vector![0.0, 1.0], &vector![1.0]),
        Err(Error::LengthMismatch { x: 2, y: 1 })
    );
}
