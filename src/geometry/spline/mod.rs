mod control_point;
mod fit;
mod segment;

pub use control_point::ControlPoint;

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Result, SplineError};
use crate::math::{to_f64, Scalar, Vector};

use super::curve::{Curve, CurveDomain};
use segment::Segment;

/// A piecewise cubic spline through an ordered list of [`ControlPoint`]s.
///
/// Each pair of adjacent control points defines one segment, a cubic
/// Hermite polynomial matching both positions and both tangents. Segment
/// polynomials are cached and refit lazily: changing a control point only
/// invalidates the two segments touching it, and those are rebuilt the next
/// time a parameter inside them is evaluated.
///
/// The spline always holds at least two control points with strictly
/// increasing parameters. Its domain is the half-open range
/// `[start_time(), end_time())`.
#[derive(Debug, Clone)]
pub struct Spline<T, R> {
    points: Vec<ControlPoint<T, R>>,
    segments: Vec<Option<Segment<T>>>,
    rebuilds: u64,
}

impl<T: Vector<R>, R: Scalar> Spline<T, R> {
    /// Builds a Catmull-Rom spline through `positions`, timed over `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptyOrSingletonInput`] if fewer than two
    /// positions are given.
    pub fn from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_positions_over(positions, R::one())
    }

    /// Builds a Catmull-Rom spline through `positions`, timed over `[0, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptyOrSingletonInput`] if fewer than two
    /// positions are given, or [`SplineError::NonMonotonicParameters`] if
    /// `max` is not positive.
    pub fn from_positions_over<I>(positions: I, max: R) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let points = positions.into_iter().map(ControlPoint::from_position).collect();
        let mut spline = Self::with_points(points)?;
        spline.linear_timing(max)?;
        spline.catmull_rom();
        Ok(spline)
    }

    /// Builds a spline from fully specified control points. No fitting is done.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::EmptyOrSingletonInput`] if fewer than two
    /// points are given, or [`SplineError::NonMonotonicParameters`] if the
    /// parameters are not strictly increasing.
    pub fn from_control_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = ControlPoint<T, R>>,
    {
        let spline = Self::with_points(points.into_iter().collect())?;
        spline.validate()?;
        Ok(spline)
    }

    fn with_points(points: Vec<ControlPoint<T, R>>) -> Result<Self> {
        if points.len() < 2 {
            return Err(SplineError::EmptyOrSingletonInput {
                count: points.len(),
            });
        }
        let segments = std::iter::repeat_with(|| None)
            .take(points.len() - 1)
            .collect();
        debug!(points = points.len(), "created spline");
        Ok(Self {
            points,
            segments,
            rebuilds: 0,
        })
    }

    /// Appends `point` at the end of the spline.
    ///
    /// Timing and tangents are not refit; the point must carry meaningful
    /// values already.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::NonMonotonicParameters`] if the parameter of
    /// `point` does not exceed [`Self::end_time`].
    pub fn add(&mut self, point: ControlPoint<T, R>) -> Result<()> {
        let end = self.end_time();
        if point.parameter().partial_cmp(&end) != Some(Ordering::Greater) {
            return Err(SplineError::NonMonotonicParameters {
                index: self.points.len(),
                previous: to_f64(end),
                current: to_f64(point.parameter()),
            });
        }
        self.points.push(point);
        self.segments.push(None);
        Ok(())
    }

    /// Checks that control point parameters strictly increase.
    ///
    /// Useful after editing parameters through [`Self::point_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::NonMonotonicParameters`] for the first offending point.
    pub fn validate(&self) -> Result<()> {
        for (index, pair) in self.points.windows(2).enumerate() {
            let (previous, current) = (pair[0].parameter(), pair[1].parameter());
            if current.partial_cmp(&previous) != Some(Ordering::Greater) {
                return Err(SplineError::NonMonotonicParameters {
                    index: index + 1,
                    previous: to_f64(previous),
                    current: to_f64(current),
                });
            }
        }
        Ok(())
    }

    /// Returns the number of control points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments (always `point_count() - 1`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns all control points in order.
    #[must_use]
    pub fn points(&self) -> &[ControlPoint<T, R>] {
        &self.points
    }

    /// Returns control point `index`, if any.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&ControlPoint<T, R>> {
        self.points.get(index)
    }

    /// Mutable access to one control point. Setters on the point mark the
    /// neighbouring segments for rebuild.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut ControlPoint<T, R>> {
        self.points.get_mut(index)
    }

    /// Iterates over the control points.
    pub fn iter(&self) -> std::slice::Iter<'_, ControlPoint<T, R>> {
        self.points.iter()
    }

    /// Iterates mutably over the control points. Edits are picked up by the
    /// next evaluation of the segments they touch.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ControlPoint<T, R>> {
        self.points.iter_mut()
    }

    /// First valid parameter for evaluation.
    #[must_use]
    pub fn start_time(&self) -> R {
        self.points[0].parameter()
    }

    /// End of the domain. Evaluation is valid strictly below this value.
    #[must_use]
    pub fn end_time(&self) -> R {
        self.points[self.points.len() - 1].parameter()
    }

    /// Returns the half-open evaluation domain `[start_time(), end_time())`.
    #[must_use]
    pub fn domain(&self) -> CurveDomain<R> {
        CurveDomain::new(self.start_time(), self.end_time())
    }

    /// Evaluates the spline at `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::ParameterOutOfRange`] if `t` is outside the domain.
    pub fn get(&mut self, t: R) -> Result<T> {
        let index = self.find_segment(t)?;
        Ok(self.refresh_segment(index).evaluate(t))
    }

    /// Evaluates the speed (first derivative) at `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::ParameterOutOfRange`] if `t` is outside the domain.
    pub fn speed(&mut self, t: R) -> Result<T> {
        let index = self.find_segment(t)?;
        Ok(self.refresh_segment(index).derivative_at(t))
    }

    /// Evaluates the acceleration (second derivative) at `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::ParameterOutOfRange`] if `t` is outside the domain.
    pub fn acceleration(&mut self, t: R) -> Result<T> {
        let index = self.find_segment(t)?;
        Ok(self.refresh_segment(index).second_derivative_at(t))
    }
}

impl<'a, T, R> IntoIterator for &'a Spline<T, R> {
    type Item = &'a ControlPoint<T, R>;
    type IntoIter = std::slice::Iter<'a, ControlPoint<T, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T: Vector<R>, R: Scalar> Curve<T, R> for Spline<T, R> {
    fn evaluate(&mut self, t: R) -> Result<T> {
        self.get(t)
    }

    fn derivative(&mut self, t: R) -> Result<T> {
        self.speed(t)
    }

    fn second_derivative(&mut self, t: R) -> Result<T> {
        self.acceleration(t)
    }

    fn domain(&self) -> CurveDomain<R> {
        Spline::domain(self)
    }

    fn segment_count(&self) -> usize {
        Spline::segment_count(self)
    }
}
