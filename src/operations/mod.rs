pub mod creation;
pub mod fitting;
pub mod modification;
pub mod query;

use crate::math::fresnel::DEFAULT_FRESNEL_STEPS;

/// Parameters controlling curve sampling density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Integration samples per Fresnel evaluation.
    pub fresnel_steps: usize,
    /// Samples per generated Euler spiral.
    pub spiral_points: usize,
    /// Samples per generated deltoid arc.
    pub deltoid_points: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            fresnel_steps: DEFAULT_FRESNEL_STEPS,
            spiral_points: 100,
            deltoid_points: 500,
        }
    }
}
