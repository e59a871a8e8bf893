use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace};

use crate::error::{require_samples, Axis, GeometryError, Result};
use crate::geometry::CurveSegment;
use crate::math::fresnel::{fresnel_integral, DEFAULT_FRESNEL_STEPS};
use crate::math::rescale::{extent, rescale_to};
use crate::math::{linspace, Point2};

/// Generates an Euler spiral (clothoid) anchored between two points.
///
/// The raw clothoid `(C(A t), S(A t)) * sqrt(pi/2)` is sampled for
/// `t` in `[0, 1]`, then each axis is min-max rescaled onto the bounding box
/// spanned by `start` and `end`. The rescale is per axis, so it snaps the
/// spiral into that box rather than rotating it.
///
/// Only the observed extremes are pinned to the anchors. When the raw curve is
/// monotonic in both axes (`0 < A <= 1`), those are the first and last
/// samples. A negative `A` mirrors the raw curve through the origin, so the
/// samples run backward: the first lands on `end` and the last on `start`.
pub struct MakeEulerSpiral {
    start: Point2,
    end: Point2,
    num_points: usize,
    curvature_rate: f64,
    fresnel_steps: usize,
}

impl MakeEulerSpiral {
    /// Creates a new `MakeEulerSpiral` operation with 100 samples and `A = 1`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            num_points: 100,
            curvature_rate: 1.0,
            fresnel_steps: DEFAULT_FRESNEL_STEPS,
        }
    }

    #[must_use]
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Sets the curvature-rate constant `A` that scales the Fresnel bound.
    #[must_use]
    pub fn with_curvature_rate(mut self, curvature_rate: f64) -> Self {
        self.curvature_rate = curvature_rate;
        self
    }

    #[must_use]
    pub fn with_fresnel_steps(mut self, fresnel_steps: usize) -> Self {
        self.fresnel_steps = fresnel_steps;
        self
    }

    /// Executes the operation, returning `num_points` samples.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DegenerateAnchor`](crate::error::GeometryError) if
    ///   `start` and `end` share an x or y coordinate, or the raw spiral has
    ///   no extent along an axis.
    /// - [`OperationError::InsufficientSamples`](crate::error::OperationError)
    ///   if `num_points < 2` or the Fresnel step count is below 2.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<CurveSegment> {
        require_samples("num_points", self.num_points, 2)?;
        if self.start.x == self.end.x {
            return Err(GeometryError::DegenerateAnchor { axis: Axis::X }.into());
        }
        if self.start.y == self.end.y {
            return Err(GeometryError::DegenerateAnchor { axis: Axis::Y }.into());
        }

        let scale = FRAC_PI_2.sqrt();
        let mut raw_x = Vec::with_capacity(self.num_points);
        let mut raw_y = Vec::with_capacity(self.num_points);
        for t in linspace(0.0, 1.0, self.num_points) {
            let (c, s) = fresnel_integral(self.curvature_rate * t, self.fresnel_steps)?;
            raw_x.push(c * scale);
            raw_y.push(s * scale);
        }
        trace!(x_extent = ?extent(&raw_x), y_extent = ?extent(&raw_y), "raw clothoid");

        let xs = rescale_to(&raw_x, self.start.x, self.end.x, Axis::X)?;
        let ys = rescale_to(&raw_y, self.start.y, self.end.y, Axis::Y)?;
        let points: Vec<Point2> = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point2::new(x, y))
            .collect();

        debug!(
            samples = points.len(),
            curvature_rate = self.curvature_rate,
            "generated euler spiral"
        );
        CurveSegment::new(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{EvoluteError, OperationError};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn axis_extents(seg: &CurveSegment) -> ((f64, f64), (f64, f64)) {
        let xs: Vec<f64> = seg.points().iter().map(|q| q.x).collect();
        let ys: Vec<f64> = seg.points().iter().map(|q| q.y).collect();
        (extent(&xs).unwrap(), extent(&ys).unwrap())
    }

    #[test]
    fn default_sample_count() {
        let seg = MakeEulerSpiral::new(p(2.0, 3.0), p(5.0, 2.0))
            .with_fresnel_steps(500)
            .execute()
            .unwrap();
        assert_eq!(seg.len(), 100);
    }

    #[test]
    fn extremes_match_anchor_box() {
        let cases = [
            (p(2.0, 3.0), p(5.0, 2.0)),
            (p(-1.0, -1.0), p(4.0, 7.5)),
            (p(10.0, 0.0), p(-3.0, -2.0)),
        ];
        for (start, end) in cases {
            let seg = MakeEulerSpiral::new(start, end)
                .with_num_points(40)
                .with_fresnel_steps(1_000)
                .execute()
                .unwrap();
            let ((x_lo, x_hi), (y_lo, y_hi)) = axis_extents(&seg);
            assert_relative_eq!(x_lo, start.x.min(end.x), epsilon = 1e-12);
            assert_relative_eq!(x_hi, start.x.max(end.x), epsilon = 1e-12);
            assert_relative_eq!(y_lo, start.y.min(end.y), epsilon = 1e-12);
            assert_relative_eq!(y_hi, start.y.max(end.y), epsilon = 1e-12);
        }
    }

    #[test]
    fn unit_rate_spiral_is_anchored_at_both_ends() {
        let start = p(2.0, 3.0);
        let end = p(5.0, 2.0);
        let seg = MakeEulerSpiral::new(start, end)
            .with_fresnel_steps(2_000)
            .execute()
            .unwrap();
        assert_relative_eq!(seg.first().x, start.x, epsilon = 1e-12);
        assert_relative_eq!(seg.first().y, start.y, epsilon = 1e-12);
        assert_relative_eq!(seg.last().x, end.x, epsilon = 1e-12);
        assert_relative_eq!(seg.last().y, end.y, epsilon = 1e-12);
    }

    #[test]
    fn negative_rate_runs_backward() {
        let start = p(2.0, 3.0);
        let end = p(5.0, 2.0);
        let seg = MakeEulerSpiral::new(start, end)
            .with_curvature_rate(-1.0)
            .with_fresnel_steps(2_000)
            .execute()
            .unwrap();
        assert_relative_eq!(seg.first().x, end.x, epsilon = 1e-12);
        assert_relative_eq!(seg.first().y, end.y, epsilon = 1e-12);
        assert_relative_eq!(seg.last().x, start.x, epsilon = 1e-12);
        assert_relative_eq!(seg.last().y, start.y, epsilon = 1e-12);
    }

    #[test]
    fn shared_x_is_degenerate() {
        let err = MakeEulerSpiral::new(p(1.0, 0.0), p(1.0, 5.0))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            EvoluteError::Geometry(GeometryError::DegenerateAnchor { axis: Axis::X })
        ));
    }

    #[test]
    fn shared_y_is_degenerate() {
        let err = MakeEulerSpiral::new(p(0.0, 2.0), p(3.0, 2.0))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            EvoluteError::Geometry(GeometryError::DegenerateAnchor { axis: Axis::Y })
        ));
    }

    #[test]
    fn zero_rate_has_no_extent() {
        let err = MakeEulerSpiral::new(p(0.0, 0.0), p(1.0, 1.0))
            .with_curvature_rate(0.0)
            .with_fresnel_steps(10)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            EvoluteError::Geometry(GeometryError::DegenerateAnchor { .. })
        ));
    }

    #[test]
    fn too_few_points() {
        let err = MakeEulerSpiral::new(p(0.0, 0.0), p(1.0, 1.0))
            .with_num_points(1)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            EvoluteError::Operation(OperationError::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn fresnel_step_error_propagates() {
        let err = MakeEulerSpiral::new(p(0.0, 0.0), p(1.0, 1.0))
            .with_fresnel_steps(1)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            EvoluteError::Operation(OperationError::InsufficientSamples {
                parameter: "fresnel_steps",
                ..
            })
        ));
    }
}
