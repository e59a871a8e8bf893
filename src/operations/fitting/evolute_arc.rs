use tracing::info;

use crate::error::{require_samples, Result};
use crate::geometry::{AngleSpan, CircleFit, CurveSegment, Polyline};
use crate::operations::creation::MakeDeltoid;
use crate::operations::query::{CircumscribedCircle, Orientation};
use crate::operations::SamplingParams;

/// Sweep of the fitted arc: two of the deltoid's three lobes.
const ARC_SPAN: (f64, f64) = (0.0, 240.0);

/// Offset from the chord direction to the deltoid's first cusp, in degrees.
const CUSP_OFFSET_DEG: f64 = 30.0;

/// Result of [`EvoluteArc`].
#[derive(Debug, Clone)]
pub struct EvoluteFit {
    /// Circle fitted to the path endpoints.
    pub circle: CircleFit,
    /// Chord direction from first to last point, in degrees.
    pub orientation_deg: f64,
    /// Sampled deltoid arc.
    pub segment: CurveSegment,
}

/// Fits a deltoid arc between the first and last points of a path.
///
/// Uses the first, last and middle (`len / 2`) samples to fit a 120° circle,
/// then sweeps the deltoid from 0° to 240° with radius equal to the circle's,
/// rotated by `orientation - 30°` and centered on the circle.
pub struct EvoluteArc<'a> {
    path: &'a Polyline,
    params: SamplingParams,
}

impl<'a> EvoluteArc<'a> {
    /// Creates a new `EvoluteArc` operation with default sampling.
    #[must_use]
    pub fn new(path: &'a Polyline) -> Self {
        Self {
            path,
            params: SamplingParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the fit.
    ///
    /// # Errors
    ///
    /// - [`OperationError::InsufficientSamples`](crate::error::OperationError)
    ///   if the path has fewer than 3 points.
    /// - Any error of [`CircumscribedCircle`] or [`MakeDeltoid`].
    pub fn execute(&self) -> Result<EvoluteFit> {
        let points = &self.path.points;
        require_samples("path points", points.len(), 3)?;

        let p1 = points[0];
        let p2 = points[points.len() - 1];
        let pm = points[points.len() / 2];

        let circle = CircumscribedCircle::new(p1, p2, pm).execute()?;
        let orientation_deg = Orientation::new(p1, p2).execute()?;

        let span = AngleSpan::new(ARC_SPAN.0, ARC_SPAN.1)
            .rotated(orientation_deg - CUSP_OFFSET_DEG);
        let segment = MakeDeltoid::new(circle.radius, span)
            .with_translation(circle.center.coords)
            .with_num_points(self.params.deltoid_points)
            .execute()?;

        info!(
            radius = circle.radius,
            orientation_deg,
            samples = segment.len(),
            "fitted evolute arc"
        );
        Ok(EvoluteFit {
            circle,
            orientation_deg,
            segment,
        })
    }
}
