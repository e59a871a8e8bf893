use super::{Point2, TOLERANCE};

/// Perpendicular bisector of a segment, in slope-intercept form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bisector {
    /// `y = slope * x + intercept`.
    Sloped { slope: f64, intercept: f64 },
    /// A vertical line at `x`, the infinite-slope case (the segment is horizontal).
    Vertical { x: f64 },
}

/// Midpoint of `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Perpendicular bisector of segment `a`–`b`.
///
/// Returns `None` for a zero-length segment.
#[must_use]
pub fn perpendicular_bisector(a: &Point2, b: &Point2) -> Option<Bisector> {
    let d = b - a;
    if d.norm() < TOLERANCE {
        return None;
    }
    let mid = midpoint(a, b);
    if d.y.abs() < TOLERANCE {
        return Some(Bisector::Vertical { x: mid.x });
    }
    let slope = -d.x / d.y;
    Some(Bisector::Sloped {
        slope,
        intercept: mid.y - slope * mid.x,
    })
}

/// Intersects two bisector lines.
///
/// Returns `None` when the lines are parallel (equal slopes, or both vertical).
#[must_use]
pub fn intersect_bisectors(b1: &Bisector, b2: &Bisector) -> Option<Point2> {
    match (*b1, *b2) {
        (Bisector::Vertical { .. }, Bisector::Vertical { .. }) => None,
        (Bisector::Vertical { x }, Bisector::Sloped { slope, intercept })
        | (Bisector::Sloped { slope, intercept }, Bisector::Vertical { x }) => {
            Some(Point2::new(x, slope * x + intercept))
        }
        (
            Bisector::Sloped {
                slope: s1,
                intercept: i1,
            },
            Bisector::Sloped {
                slope: s2,
                intercept: i2,
            },
        ) => {
            if (s1 - s2).abs() < TOLERANCE {
                return None;
            }
            let x = (i2 - i1) / (s1 - s2);
            Some(Point2::new(x, s1 * x + i1))
        }
    }
}
