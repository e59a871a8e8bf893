use tracing::debug;

use crate::error::{require_samples, GeometryError, Result};
use crate::geometry::{AngleSpan, CurveSegment};
use crate::math::{linspace, Isometry2, Point2, Vector2};

/// Builds an arc of a deltoid (three-cusped hypocycloid).
///
/// Canonical form: `x(t) = 2 cos t + cos 2t`, `y(t) = 2 sin t - sin 2t`,
/// whose cusps lie at distance 3 from the center. Samples are scaled by
/// `radius / 3`, rotated by `span.rotate_deg` about the origin, then
/// translated.
pub struct MakeDeltoid {
    radius: f64,
    span: AngleSpan,
    translation: Vector2,
    num_points: usize,
}

impl MakeDeltoid {
    /// Creates a new `MakeDeltoid` operation with 500 samples and no translation.
    #[must_use]
    pub fn new(radius: f64, span: AngleSpan) -> Self {
        Self {
            radius,
            span,
            translation: Vector2::zeros(),
            num_points: 500,
        }
    }

    #[must_use]
    pub fn with_translation(mut self, translation: Vector2) -> Self {
        self.translation = translation;
        self
    }

    #[must_use]
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Executes the operation.
    ///
    /// A reversed span (`start_deg > end_deg`) yields the points in reverse
    /// order.
    ///
    /// A negative radius mirrors the arc through the origin before it is
    /// translated. A zero radius collapses every sample onto the translation.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_points < 2` or the radius is not finite.
    pub fn execute(&self) -> Result<CurveSegment> {
        require_samples("num_points", self.num_points, 2)?;
        if !self.radius.is_finite() {
            return Err(GeometryError::Degenerate("deltoid radius must be finite".into()).into());
        }

        let scale = self.radius / 3.0;
        let transform = Isometry2::new(self.translation, self.span.rotate_deg.to_radians());
        let (t0, t1) = self.span.radians();

        let points = linspace(t0, t1, self.num_points)
            .map(|t| transform * (canonical_point(t) * scale))
            .collect();

        debug!(
            radius = self.radius,
            start_deg = self.span.start_deg,
            end_deg = self.span.end_deg,
            rotate_deg = self.span.rotate_deg,
            samples = self.num_points,
            "built deltoid arc"
        );
        CurveSegment::new(points)
    }
}

/// Unscaled deltoid point at parameter `t` (radians).
fn canonical_point(t: f64) -> Point2 {
    Point2::new(
        2.0 * t.cos() + (2.0 * t).cos(),
        2.0 * t.sin() - (2.0 * t).sin(),
    )
}
