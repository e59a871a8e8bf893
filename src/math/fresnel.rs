use std::f64::consts::FRAC_PI_2;

use crate::error::{require_samples, Result};

use super::linspace;

/// Default number of integration samples.
pub const DEFAULT_FRESNEL_STEPS: usize = 10_000;

/// Approximates the Fresnel integrals `(C(t), S(t))` with `steps` uniform
/// samples on `[0, t]`.
///
/// `C(t) = ∫₀ᵗ cos(π s² / 2) ds` and `S(t) = ∫₀ᵗ sin(π s² / 2) ds`, taken as
/// a cumulative Riemann sum.
///
/// Every sample, both endpoints included, contributes `f(s_i) * ds` with
/// `ds = t / (steps - 1)`. Accuracy degrades for large `|t|` or small `steps`;
/// there is no adaptive error control.
///
/// # Errors
///
/// Returns [`OperationError::InsufficientSamples`](crate::error::OperationError)
/// if `steps < 2`.
#[allow(clippy::cast_precision_loss)]
pub fn fresnel_integral(t: f64, steps: usize) -> Result<(f64, f64)> {
    require_samples("fresnel_steps", steps, 2)?;

    let ds = t / (steps - 1) as f64;
    let (sum_cos, sum_sin) = linspace(0.0, t, steps).fold((0.0, 0.0), |(c, s), x| {
        let phase = FRAC_PI_2 * x * x;
        (c + phase.cos(), s + phase.sin())
    });

    Ok((sum_cos * ds, sum_sin * ds))
}
