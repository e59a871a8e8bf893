use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::CircleFit;
use crate::math::bisector_2d::{intersect_bisectors, perpendicular_bisector};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Fits the circle of a 120° arc through two path endpoints.
///
/// `p1` and `p2` are treated as the outer ends of an arc subtending 120°, so
/// the chord-to-radius ratio is fixed at `1/√3`:
///
/// 1. The perpendicular bisectors of `p1`–`p2` and `p1`–`pm` are intersected
///    to get a candidate center.
/// 2. The candidate is shifted along the chord's left normal `(-u.y, u.x)` by
///    `|p2 - p1| / (2√3)`.
/// 3. The radius is `|p2 - p1| / √3`, regardless of where the shifted center
///    ends up.
///
/// This is not a general circumcircle solver. `pm` only influences the center.
pub struct CircumscribedCircle {
    p1: Point2,
    p2: Point2,
    pm: Point2,
}

impl CircumscribedCircle {
    /// Creates a new `CircumscribedCircle` query.
    ///
    /// * `p1`, `p2` - Path endpoints (the chord).
    /// * `pm` - Interior reference point, typically the path's middle sample.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, pm: Point2) -> Self {
        Self { p1, p2, pm }
    }

    /// Executes the query, returning the fitted circle.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DegenerateChord`] if `p1` and `p2` coincide.
    /// - [`GeometryError::CollinearInput`] if the bisectors are parallel or
    ///   `pm` coincides with `p1`.
    pub fn execute(&self) -> Result<CircleFit> {
        let chord = self.p2 - self.p1;
        let chord_len = chord.norm();
        if chord_len < TOLERANCE {
            return Err(GeometryError::DegenerateChord.into());
        }

        let b1 = perpendicular_bisector(&self.p1, &self.p2)
            .ok_or(GeometryError::DegenerateChord)?;
        let b2 = perpendicular_bisector(&self.p1, &self.pm)
            .ok_or(GeometryError::CollinearInput)?;
        let candidate = intersect_bisectors(&b1, &b2)
            .ok_or(GeometryError::CollinearInput)?;
        trace!(?b1, ?b2, cx = candidate.x, cy = candidate.y, "bisector center");

        let sqrt3 = 3.0_f64.sqrt();
        let u = chord / chord_len;
        let normal = Vector2::new(-u.y, u.x);
        let center = candidate + normal * (chord_len / (2.0 * sqrt3));
        let radius = chord_len / sqrt3;

        debug!(
            cx = center.x,
            cy = center.y,
            radius,
            "fitted 120-degree circle"
        );
        Ok(CircleFit::new(center, radius))
    }
}
