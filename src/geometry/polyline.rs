use crate::math::Point2;

use super::CurveSegment;

/// An ordered sequence of 2D points. Order defines the path direction.
///
/// Duplicate and colinear points are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a polyline from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point2> {
        self.points.get(index)
    }
}

impl From<Vec<Point2>> for Polyline {
    fn from(points: Vec<Point2>) -> Self {
        Self { points }
    }
}

impl From<CurveSegment> for Polyline {
    fn from(segment: CurveSegment) -> Self {
        Self {
            points: segment.into_points(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_keeps_order_and_duplicates() {
        let pl = Polyline::from_xy(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(pl.len(), 3);
        assert_eq!(pl.points[1], pl.points[2]);
        assert_eq!(*pl.get(0).unwrap(), Point2::new(0.0, 0.0));
        assert!(pl.get(3).is_none());
    }

    #[test]
    fn from_segment() {
        let seg = CurveSegment::new(vec![Point2::new(1.0, 2.0)]).unwrap();
        let pl = Polyline::from(seg);
        assert_eq!(pl.points, vec![Point2::new(1.0, 2.0)]);
    }
}
