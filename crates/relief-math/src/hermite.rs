//! Piecewise cubic Hermite curves over a partitioned 1D domain.
//!
//! Given `N` points, `N` tangents and `N` range boundaries, the curve is made
//! of `N - 1` cubic segments. Segment `i` covers `(ranges[i - 1], ranges[i]]`
//! and interpolates from `points[i - 1]` to `points[i]`; the first segment is
//! closed on both sides.

use glam::Vec2;

/// Errors that can occur when building a [`CubicHermiteCurve`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Points, tangents and ranges must have the same length.
    #[error("curve has {points} points, {tangents} tangents and {ranges} ranges")]
    LengthMismatch {
        points: usize,
        tangents: usize,
        ranges: usize,
    },

    /// At least two control points are needed to form a segment.
    #[error("curve needs at least 2 control points, got {0}")]
    TooFewPoints(usize),

    /// Range boundaries must be finite and strictly increasing.
    #[error("range boundary {index} ({value}) does not strictly increase")]
    UnsortedRanges { index: usize, value: f32 },
}

/// A piecewise cubic Hermite curve. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicHermiteCurve {
    points: Vec<Vec2>,
    tangents: Vec<Vec2>,
    ranges: Vec<f32>,
}

impl CubicHermiteCurve {
    /// Build a curve from control points, tangents and range boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError`] if the three vectors differ in length, hold
    /// fewer than two entries, or the ranges are not strictly increasing.
    pub fn new(
        points: Vec<Vec2>,
        tangents: Vec<Vec2>,
        ranges: Vec<f32>,
    ) -> Result<Self, CurveError> {
        if points.len() != tangents.len() || points.len() != ranges.len() {
            return Err(CurveError::LengthMismatch {
                points: points.len(),
                tangents: tangents.len(),
                ranges: ranges.len(),
            });
        }
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        for (index, pair) in ranges.windows(2).enumerate() {
            if !(pair[0].is_finite() && pair[1].is_finite() && pair[0] < pair[1]) {
                return Err(CurveError::UnsortedRanges {
                    index: index + 1,
                    value: pair[1],
                });
            }
        }
        Ok(Self {
            points,
            tangents,
            ranges,
        })
    }

    /// The identity map on `[0, 1]`: `evaluate(t) == (t, t)`.
    pub fn identity() -> Self {
        Self {
            points: vec![Vec2::ZERO, Vec2::ONE],
            tangents: vec![Vec2::ONE, Vec2::ONE],
            ranges: vec![0.0, 1.0],
        }
    }

    /// Redistribution curve that flattens lowlands and steepens peaks.
    pub fn terrain_default() -> Self {
        Self {
            points: vec![Vec2::ZERO, Vec2::new(0.4, 0.1), Vec2::ONE],
            tangents: vec![
                Vec2::new(1.0, 0.1),
                Vec2::new(1.0, 0.1),
                Vec2::new(0.7, 2.0),
            ],
            ranges: vec![0.0, 0.4, 1.0],
        }
    }

    /// Evaluate the curve at `parameter`.
    ///
    /// # Panics
    ///
    /// Panics if `parameter` lies outside `[ranges[0], ranges[N - 1]]`.
    pub fn evaluate(&self, parameter: f32) -> Vec2 {
        let (start, end) = self.domain();
        assert!(
            parameter >= start && parameter <= end,
            "curve parameter {parameter} outside domain [{start}, {end}]"
        );

        let last = self.ranges.len() - 1;
        let index = if parameter == start {
            1
        } else {
            // Upper bound: first boundary strictly greater than the parameter.
            self.ranges.partition_point(|&r| r <= parameter).min(last)
        };

        let lower = self.ranges[index - 1];
        let t = (parameter - lower) / (self.ranges[index] - lower);
        cubic_hermite_interpolation(
            self.points[index - 1],
            self.points[index],
            self.tangents[index - 1],
            self.tangents[index],
            t,
        )
    }

    /// Returns `(ranges[0], ranges[N - 1])`.
    pub fn domain(&self) -> (f32, f32) {
        (self.ranges[0], self.ranges[self.ranges.len() - 1])
    }

    /// Whether `[0, 1]` lies inside the curve domain, as required when the
    /// curve redistributes normalized heights.
    pub fn covers_unit_interval(&self) -> bool {
        let (start, end) = self.domain();
        start <= 0.0 && end >= 1.0
    }

    /// Number of cubic segments (`N - 1`).
    pub fn segment_count(&self) -> usize {
        self.ranges.len() - 1
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn tangents(&self) -> &[Vec2] {
        &self.tangents
    }

    pub fn ranges(&self) -> &[f32] {
        &self.ranges
    }
}

/// Cubic Hermite basis evaluated at `t ∈ [0, 1]`.
///
/// `H(t) = (2t³-3t²+1)·P0 + (t³-2t²+t)·T0 + (t³-t²)·T1 + (-2t³+3t²)·P1`
pub fn cubic_hermite_interpolation(
    start_point: Vec2,
    end_point: Vec2,
    start_tangent: Vec2,
    end_tangent: Vec2,
    t: f32,
) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * start_point
        + (t3 - 2.0 * t2 + t) * start_tangent
        + (t3 - t2) * end_tangent
        + (-2.0 * t3 + 3.0 * t2) * end_point
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn three_segment_curve() -> CubicHermiteCurve {
        CubicHermiteCurve::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.2, 0.5),
                Vec2::new(0.6, 0.3),
                Vec2::new(1.0, 1.0),
            ],
            vec![
                Vec2::new(1.0, 2.0),
                Vec2::new(1.0, -0.5),
                Vec2::new(0.5, 0.8),
                Vec2::new(1.0, 3.0),
            ],
            vec![0.0, 0.25, 0.5, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn test_identity_curve_is_identity() {
        let curve = CubicHermiteCurve::identity();
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let v = curve.evaluate(t);
            assert!(
                (v.y - t).abs() < EPSILON,
                "identity curve at {t} gave {v}"
            );
        }
        assert_eq!(curve.evaluate(1.0), Vec2::ONE);
    }

    #[test]
    fn test_segment_endpoints_are_exact() {
        let curve = three_segment_curve();
        for (i, &r) in curve.ranges().iter().enumerate() {
            assert_eq!(
                curve.evaluate(r),
                curve.points()[i],
                "evaluate at boundary {r} must return control point {i}"
            );
        }
    }

    #[test]
    fn test_basis_boundary_conditions() {
        let p0 = Vec2::new(0.3, -1.0);
        let p1 = Vec2::new(2.0, 4.0);
        let t0 = Vec2::new(5.0, 7.0);
        let t1 = Vec2::new(-3.0, 0.25);
        assert_eq!(cubic_hermite_interpolation(p0, p1, t0, t1, 0.0), p0);
        assert_eq!(cubic_hermite_interpolation(p0, p1, t0, t1, 1.0), p1);
    }

    #[test]
    fn test_continuous_at_segment_boundaries() {
        let curve = three_segment_curve();
        for &boundary in &curve.ranges()[1..curve.ranges().len() - 1] {
            let left = curve.evaluate(boundary - 1e-4);
            let right = curve.evaluate(boundary + 1e-4);
            assert!(
                (left - right).length() < 1e-2,
                "discontinuity at {boundary}: {left} vs {right}"
            );
        }
    }

    #[test]
    fn test_start_of_domain_uses_first_segment() {
        let curve = three_segment_curve();
        assert_eq!(curve.evaluate(0.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_terrain_default_is_monotonic_on_unit_interval() {
        let curve = CubicHermiteCurve::terrain_default();
        assert!(curve.covers_unit_interval());
        let mut previous = curve.evaluate(0.0).y;
        for i in 1..=100 {
            let y = curve.evaluate(i as f32 / 100.0).y;
            assert!(y >= previous, "curve decreased at step {i}: {previous} -> {y}");
            assert!((0.0..=1.0 + EPSILON).contains(&y));
            previous = y;
        }
    }

    #[test]
    #[should_panic(expected = "outside domain")]
    fn test_parameter_outside_domain_panics() {
        CubicHermiteCurve::identity().evaluate(1.5);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = CubicHermiteCurve::new(
            vec![Vec2::ZERO; 3],
            vec![Vec2::ONE; 2],
            vec![0.0, 0.5, 1.0],
        )
        .unwrap_err();
        assert!(matches!(err, CurveError::LengthMismatch { .. }));
    }

    #[test]
    fn test_single_point_rejected() {
        let err = CubicHermiteCurve::new(vec![Vec2::ZERO], vec![Vec2::ONE], vec![0.0]).unwrap_err();
        assert_eq!(err, CurveError::TooFewPoints(1));
    }

    #[test]
    fn test_unsorted_ranges_rejected() {
        let err = CubicHermiteCurve::new(
            vec![Vec2::ZERO; 3],
            vec![Vec2::ONE; 3],
            vec![0.0, 0.5, 0.5],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CurveError::UnsortedRanges {
                index: 2,
                value: 0.5
            }
        );
    }
}
