use std::f64::consts::TAU;

use crate::error::{require_samples, Result};
use crate::math::{linspace, Point2, Vector2};

use super::CurveSegment;

/// A circle given by center and radius.
///
/// Produced by [`CircumscribedCircle`](crate::operations::query::CircumscribedCircle);
/// the radius is positive for any non-degenerate fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFit {
    pub center: Point2,
    pub radius: f64,
}

impl CircleFit {
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point at angle `theta` (radians, counter-clockwise from +X).
    #[must_use]
    pub fn point_at(&self, theta: f64) -> Point2 {
        self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius
    }

    /// Samples the full circle with `num_points` points over `[0, 2π]`.
    ///
    /// The first and last samples coincide.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InsufficientSamples`](crate::error::OperationError)
    /// if `num_points < 2`.
    pub fn sample(&self, num_points: usize) -> Result<CurveSegment> {
        require_samples("num_points", num_points, 2)?;
        CurveSegment::new(
            linspace(0.0, TAU, num_points)
                .map(|theta| self.point_at(theta))
                .collect(),
        )
    }
}
