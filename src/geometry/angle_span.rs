/// Angular sweep of a deltoid arc, in degrees.
///
/// There is no ordering requirement: `start_deg > end_deg` sweeps backward.
/// `rotate_deg` turns the whole arc about the origin before translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSpan {
    pub start_deg: f64,
    pub end_deg: f64,
    pub rotate_deg: f64,
}

impl AngleSpan {
    /// Creates a span with no rotation.
    #[must_use]
    pub fn new(start_deg: f64, end_deg: f64) -> Self {
        Self {
            start_deg,
            end_deg,
            rotate_deg: 0.0,
        }
    }

    /// Returns a copy with the given rotation.
    #[must_use]
    pub fn rotated(self, rotate_deg: f64) -> Self {
        Self { rotate_deg, ..self }
    }

    /// Start and end of the sweep in radians.
    #[must_use]
    pub fn radians(&self) -> (f64, f64) {
        (self.start_deg.to_radians(), self.end_deg.to_radians())
    }
}
