use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// Direction of the chord from `p1` to `p2`, in degrees.
///
/// Used as the base rotation when orienting a fitted deltoid arc.
pub struct Orientation {
    p1: Point2,
    p2: Point2,
}

impl Orientation {
    /// Creates a new `Orientation` query.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Executes the query, returning `atan2(dy, dx)` in degrees, in `(-180, 180]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateChord`] if `p1` and `p2` coincide.
    pub fn execute(&self) -> Result<f64> {
        let d = self.p2 - self.p1;
        if d.norm() < TOLERANCE {
            return Err(GeometryError::DegenerateChord.into());
        }
        Ok(d.y.atan2(d.x).to_degrees())
    }
}
