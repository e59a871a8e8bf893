pub mod bisector_2d;
pub mod fresnel;
pub mod rescale;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rigid transform (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// `n` evenly spaced samples over `[start, stop]`.
///
/// The first sample is exactly `start` and, for `n >= 2`, the last is exactly
/// `stop`. A reversed range (`start > stop`) yields descending samples.
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            start + step * i as f64
        }
    })
}
