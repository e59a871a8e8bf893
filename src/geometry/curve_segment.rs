use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An ordered, non-empty run of sampled curve points.
///
/// Produced by the curve generators and consumed by splicing or rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSegment {
    points: Vec<Point2>,
}

impl CurveSegment {
    /// Wraps sampled points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySegment`] if `points` is empty.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptySegment.into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First sample.
    #[must_use]
    pub fn first(&self) -> &Point2 {
        &self.points[0]
    }

    /// Last sample.
    #[must_use]
    pub fn last(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }
}
