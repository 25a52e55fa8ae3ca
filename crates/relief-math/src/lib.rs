//! Curve math for terrain height redistribution.

mod hermite;

pub use hermite::{CubicHermiteCurve, CurveError, cubic_hermite_interpolation};
