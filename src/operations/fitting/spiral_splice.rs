use tracing::info;

use crate::error::Result;
use crate::geometry::Polyline;
use crate::operations::creation::MakeEulerSpiral;
use crate::operations::modification::{check_range, Splice};
use crate::operations::SamplingParams;

/// Replaces `path[start..=end]` with an Euler spiral between the two
/// boundary points.
pub struct SpiralSplice<'a> {
    path: &'a Polyline,
    start: usize,
    end: usize,
    params: SamplingParams,
}

impl<'a> SpiralSplice<'a> {
    /// Creates a new `SpiralSplice` operation with default sampling.
    #[must_use]
    pub fn new(path: &'a Polyline, start: usize, end: usize) -> Self {
        Self {
            path,
            start,
            end,
            params: SamplingParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the spliced path.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::IndexRange`](crate::error::OperationError) for
    /// an invalid range, or any error of [`MakeEulerSpiral`] (notably
    /// `DegenerateAnchor` when the two boundary points share a coordinate).
    pub fn execute(&self) -> Result<Polyline> {
        check_range(self.path, self.start, self.end)?;
        let from = self.path.points[self.start];
        let to = self.path.points[self.end];

        let spiral = MakeEulerSpiral::new(from, to)
            .with_num_points(self.params.spiral_points)
            .with_fresnel_steps(self.params.fresnel_steps)
            .execute()?;
        let out = Splice::new(self.path, self.start, self.end, &spiral).execute()?;

        info!(
            start = self.start,
            end = self.end,
            before = self.path.len(),
            after = out.len(),
            "spliced euler spiral into path"
        );
        Ok(out)
    }
}
