use tracing::trace;

use crate::error::{Result, SplineError};
use crate::math::{to_f64, Polynomial, Scalar, Vector};

use super::control_point::{ControlPoint, Revision};
use super::Spline;

/// Cached polynomial of one segment, with the endpoint revisions it was fit against.
#[derive(Debug, Clone)]
pub(super) struct Segment<T> {
    polynomial: Polynomial<T>,
    left: Revision,
    right: Revision,
}

impl<T> Segment<T> {
    /// Fits the segment between two adjacent control points.
    fn build<R: Scalar>(left: &ControlPoint<T, R>, right: &ControlPoint<T, R>) -> Self
    where
        T: Vector<R>,
    {
        Self {
            polynomial: Polynomial::hermite(
                left.position(),
                left.tangent(),
                left.parameter(),
                right.position(),
                right.tangent(),
                right.parameter(),
            ),
            left: left.revision(),
            right: right.revision(),
        }
    }

    fn is_built_from<R: Scalar>(&self, left: &ControlPoint<T, R>, right: &ControlPoint<T, R>) -> bool
    where
        T: Vector<R>,
    {
        self.left == left.revision() && self.right == right.revision()
    }
}

impl<T: Vector<R>, R: Scalar> Spline<T, R> {
    /// Returns the index `i` of the segment with
    /// `points[i].parameter <= t < points[i + 1].parameter`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::ParameterOutOfRange`] if `t` lies outside
    /// `[start_time(), end_time())` or is NaN.
    pub fn find_segment(&self, t: R) -> Result<usize> {
        let domain = self.domain();
        if !domain.contains(t) {
            return Err(SplineError::ParameterOutOfRange {
                value: to_f64(t),
                min: to_f64(domain.t_min),
                max: to_f64(domain.t_max),
            });
        }
        Ok(self.points[1..].partition_point(|p| p.parameter() <= t))
    }

    /// Makes sure segment `index` matches its endpoints and returns its polynomial.
    ///
    /// The polynomial is refit only when either endpoint changed since the
    /// last fit.
    pub(super) fn refresh_segment(&mut self, index: usize) -> &Polynomial<T> {
        let left = &self.points[index];
        let right = &self.points[index + 1];
        let slot = &mut self.segments[index];

        if slot.as_ref().is_some_and(|s| !s.is_built_from(left, right)) {
            *slot = None;
        }
        if slot.is_none() {
            trace!(
                segment = index,
                t0 = to_f64(left.parameter()),
                t1 = to_f64(right.parameter()),
                "rebuilding segment polynomial"
            );
            self.rebuilds += 1;
        }
        &slot.get_or_insert_with(|| Segment::build(left, right)).polynomial
    }

    /// Returns how many of the (at most two) segments touching point `index`
    /// were fit against an older state of that point.
    ///
    /// Returns 0 for an index past the end.
    #[must_use]
    pub fn pending_segments(&self, index: usize) -> usize {
        let Some(point) = self.points.get(index) else {
            return 0;
        };
        let revision = point.revision();

        let before = index
            .checked_sub(1)
            .map(|i| &self.segments[i])
            .is_some_and(|s| !s.as_ref().is_some_and(|s| s.right == revision));
        let after = self
            .segments
            .get(index)
            .is_some_and(|s| !s.as_ref().is_some_and(|s| s.left == revision));

        usize::from(before) + usize::from(after)
    }

    /// Returns whether point `index` changed since the segments touching it
    /// were last rebuilt.
    #[must_use]
    pub fn is_point_dirty(&self, index: usize) -> bool {
        self.pending_segments(index) > 0
    }

    /// Eagerly rebuilds every stale segment, returning how many were rebuilt.
    pub fn update(&mut self) -> usize {
        let before = self.rebuilds;
        for index in 0..self.segments.len() {
            self.refresh_segment(index);
        }
        usize::try_from(self.rebuilds - before).unwrap_or(usize::MAX)
    }

    /// Returns the up-to-date polynomial of segment `index`, or `None` if
    /// there is no such segment.
    pub fn segment(&mut self, index: usize) -> Option<&Polynomial<T>> {
        if index < self.segments.len() {
            Some(self.refresh_segment(index))
        } else {
            None
        }
    }

    /// Total number of segment rebuilds performed so far.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::spline::ControlPoint;

    fn five_points() -> Spline<f64, f64> {
        Spline::<f64, f64>::from_positions_over([0.0, 2.0, 1.0, 3.0, 0.5], 4.0).unwrap()
    }

    #[test]
    fn find_segment_returns_left_endpoint() {
        let s = five_points();
        assert_eq!(s.find_segment(0.0).unwrap(), 0);
        assert_eq!(s.find_segment(0.999).unwrap(), 0);
        assert_eq!(s.find_segment(1.0).unwrap(), 1);
        assert_eq!(s.find_segment(2.5).unwrap(), 2);
        assert_eq!(s.find_segment(3.999).unwrap(), 3);
    }

    #[test]
    fn find_segment_rejects_out_of_range() {
        let s = five_points();
        assert!(matches!(
            s.find_segment(4.0),
            Err(SplineError::ParameterOutOfRange { .. })
        ));
        assert!(s.find_segment(-0.001).is_err());
        assert!(s.find_segment(f64::NAN).is_err());
    }

    #[test]
    fn find_segment_with_uneven_spacing() {
        let s = Spline::<f64, f64>::from_control_points([
            ControlPoint::at(0.0, 0.0),
            ControlPoint::at(1.0, 0.1),
            ControlPoint::at(2.0, 5.0),
            ControlPoint::at(3.0, 5.5),
        ])
        .unwrap();
        assert_eq!(s.find_segment(0.05).unwrap(), 0);
        assert_eq!(s.find_segment(4.9).unwrap(), 1);
        assert_eq!(s.find_segment(5.0).unwrap(), 2);
    }

    #[test]
    fn fresh_spline_has_every_point_dirty() {
        let s = five_points();
        assert_eq!(s.pending_segments(0), 1);
        assert_eq!(s.pending_segments(2), 2);
        assert_eq!(s.pending_segments(4), 1);
        assert_eq!(s.pending_segments(5), 0);
        assert!((0..5).all(|i| s.is_point_dirty(i)));
    }

    #[test]
    fn update_settles_every_point() {
        let mut s = five_points();
        assert_eq!(s.update(), 4);
        assert!((0..5).all(|i| !s.is_point_dirty(i)));
        assert_eq!(s.update(), 0);
    }

    #[test]
    fn pending_count_drops_as_each_neighbour_segment_is_rebuilt() {
        let mut s = five_points();
        s.update();

        s.point_mut(2).unwrap().set_position(10.0);
        assert_eq!(s.pending_segments(2), 2);
        assert!(!s.is_point_dirty(1));
        assert!(!s.is_point_dirty(3));

        s.get(2.5).unwrap();
        assert_eq!(s.pending_segments(2), 1);

        s.get(1.5).unwrap();
        assert_eq!(s.pending_segments(2), 0);
    }

    #[test]
    fn clean_segments_are_not_rebuilt() {
        let mut s = five_points();
        s.update();
        let rebuilds = s.rebuild_count();

        for t in [0.0, 0.5, 1.2, 2.7, 3.9] {
            s.get(t).unwrap();
            s.speed(t).unwrap();
            s.acceleration(t).unwrap();
        }
        assert_eq!(s.rebuild_count(), rebuilds);
    }

    #[test]
    fn segment_accessor() {
        let mut s = five_points();
        assert!(s.segment(3).is_some());
        assert!(s.segment(4).is_none());
        assert_eq!(s.rebuild_count(), 1);
    }
}
