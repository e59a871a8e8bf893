use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{CurveSegment, Polyline};

/// Replaces an inclusive index range of a polyline with a curve segment.
///
/// The result is `path[..start] ++ replacement ++ path[end + 1..]`. The input
/// path is left untouched and the replacement's endpoints are used verbatim;
/// no snapping to `path[start]` or `path[end]` happens here.
pub struct Splice<'a> {
    path: &'a Polyline,
    start: usize,
    end: usize,
    replacement: &'a CurveSegment,
}

impl<'a> Splice<'a> {
    /// Creates a new `Splice` operation over `path[start..=end]`.
    #[must_use]
    pub fn new(
        path: &'a Polyline,
        start: usize,
        end: usize,
        replacement: &'a CurveSegment,
    ) -> Self {
        Self {
            path,
            start,
            end,
            replacement,
        }
    }

    /// Executes the splice, returning a new polyline.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::IndexRange`] unless
    /// `start <= end < path.len()`.
    pub fn execute(&self) -> Result<Polyline> {
        check_range(self.path, self.start, self.end)?;

        let points = &self.path.points;
        let kept = points.len() - (self.end - self.start + 1);
        let mut out = Vec::with_capacity(kept + self.replacement.len());
        out.extend_from_slice(&points[..self.start]);
        out.extend_from_slice(self.replacement.points());
        out.extend_from_slice(&points[self.end + 1..]);

        debug!(
            start = self.start,
            end = self.end,
            inserted = self.replacement.len(),
            len = out.len(),
            "spliced path"
        );
        Ok(Polyline::new(out))
    }
}

/// Validates `start <= end < path.len()`.
pub(crate) fn check_range(path: &Polyline, start: usize, end: usize) -> Result<()> {
    if start > end || end >= path.len() {
        return Err(OperationError::IndexRange {
            start,
            end,
            len: path.len(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EvoluteError;
    use crate::math::Point2;

    fn path() -> Polyline {
        Polyline::from_xy(&[
            (0.0, 0.0),
            (1.0, 1.5),
            (2.0, 3.0),
            (3.0, 5.0),
            (4.0, 3.5),
            (5.0, 2.0),
            (6.0, 1.0),
        ])
    }

    fn segment(n: usize) -> CurveSegment {
        #[allow(clippy::cast_precision_loss)]
        let pts = (0..n).map(|i| Point2::new(10.0 + i as f64, -1.0)).collect();
        CurveSegment::new(pts).unwrap()
    }

    #[test]
    fn keeps_prefix_and_suffix() {
        let original = path();
        let seg = segment(4);
        let (start, end) = (2, 5);
        let out = Splice::new(&original, start, end, &seg).execute().unwrap();

        assert_eq!(out.len(), original.len() - (end - start + 1) + seg.len());
        for i in 0..start {
            assert_eq!(out.points[i], original.points[i]);
        }
        assert_eq!(&out.points[start..start + seg.len()], seg.points());
        for i in end + 1..original.len() {
            let j = i + seg.len() - (end - start + 1);
            assert_eq!(out.points[j], original.points[i]);
        }
        // Input is not modified.
        assert_eq!(original, path());
    }

    #[test]
    fn single_point_range() {
        let original = path();
        let seg = segment(3);
        let out = Splice::new(&original, 0, 0, &seg).execute().unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out.points[0], Point2::new(10.0, -1.0));
        assert_eq!(out.points[3], original.points[1]);
    }

    #[test]
    fn whole_path() {
        let original = path();
        let seg = segment(2);
        let out = Splice::new(&original, 0, 6, &seg).execute().unwrap();
        assert_eq!(out.points, seg.points());
    }

    #[test]
    fn inverted_range() {
        let original = path();
        let seg = segment(2);
        let err = Splice::new(&original, 4, 3, &seg).execute().unwrap_err();
        assert!(matches!(
            err,
            EvoluteError::Operation(OperationError::IndexRange {
                start: 4,
                end: 3,
                len: 7,
            })
        ));
    }

    #[test]
    fn end_out_of_bounds() {
        let original = path();
        let seg = segment(2);
        assert!(Splice::new(&original, 2, 7, &seg).execute().is_err());
        assert!(Splice::new(&Polyline::default(), 0, 0, &seg)
            .execute()
            .is_err());
    }
}
