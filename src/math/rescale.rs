use crate::error::{Axis, GeometryError, Result};

/// Observed `(min, max)` of a sequence, or `None` when it is empty.
#[must_use]
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Min-max rescale: linearly maps `values` from their own observed `[min, max]` onto
/// `[target_min_to, target_max_to]`.
///
/// The observed minimum lands exactly on `target_min_to` and the observed
/// maximum exactly on `target_max_to`. The target may be descending.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateAnchor`] if either the target span or
/// the observed span along `axis` is zero.
#[allow(clippy::float_cmp)]
pub fn rescale_to(
    values: &[f64],
    target_min_to: f64,
    target_max_to: f64,
    axis: Axis,
) -> Result<Vec<f64>> {
    if target_min_to == target_max_to {
        return Err(GeometryError::DegenerateAnchor { axis }.into());
    }
    let Some((lo, hi)) = extent(values) else {
        return Ok(Vec::new());
    };
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        return Err(GeometryError::DegenerateAnchor { axis }.into());
    }

    Ok(values
        .iter()
        .map(|&v| {
            let f = (v - lo) / span;
            target_min_to * (1.0 - f) + target_max_to * f
        })
        .collect())
}
