/// Pivots with an absolute value below this are treated as zero
pub const PIVOT_TOL: f64 = 1e-10;
