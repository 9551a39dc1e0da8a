use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Result, SplineError};
use crate::math::{from_count, three, to_f64, two, Scalar, Vector};

use super::{ControlPoint, Spline};

impl<T: Vector<R>, R: Scalar> Spline<T, R> {
    /// Spreads the control points evenly over `[0, max]`.
    ///
    /// With control points `C0, C1, C2` and `max = 1`, `C0` is reached at
    /// `t = 0`, `C1` at `t = 0.5` and `C2` at `t = 1`. Tangents are left
    /// untouched; call [`Self::catmull_rom`] afterwards to refit them.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::NonMonotonicParameters`] if `max` is not
    /// positive. The spline is left unchanged in that case.
    pub fn linear_timing(&mut self, max: R) -> Result<()> {
        let last: R = from_count(self.points.len() - 1);
        let parameters: Vec<R> = (0..self.points.len())
            .map(|i| from_count::<R>(i) * max / last)
            .collect();

        if let Some(index) = parameters
            .windows(2)
            .position(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Greater))
        {
            return Err(SplineError::NonMonotonicParameters {
                index: index + 1,
                previous: to_f64(parameters[index]),
                current: to_f64(parameters[index + 1]),
            });
        }

        for (point, t) in self.points.iter_mut().zip(parameters) {
            point.set_parameter(t);
        }
        debug!(points = self.points.len(), max = to_f64(max), "assigned linear timing");
        Ok(())
    }

    /// Fits every tangent so the spline becomes a Catmull-Rom spline.
    ///
    /// Interior points get the slope between their two neighbours. The two
    /// end points get the tangent that makes the second derivative vanish
    /// there (natural boundary).
    pub fn catmull_rom(&mut self) {
        let n = self.points.len();
        let mut tangents = Vec::with_capacity(n);

        tangents.push(T::zero());
        tangents.extend(self.points.windows(3).map(|w| {
            let (prev, next) = (&w[0], &w[2]);
            (prev.position().clone() - next.position().clone()) / (prev.parameter() - next.parameter())
        }));
        tangents.push(T::zero());

        if n == 2 {
            // Both ends are natural: the only such cubic is the straight chord.
            let slope = chord_slope(&self.points[0], &self.points[1]);
            tangents[0] = slope.clone();
            tangents[1] = slope;
        } else {
            tangents[0] = natural_tangent(&self.points[0], &self.points[1], &tangents[1]);
            tangents[n - 1] =
                natural_tangent(&self.points[n - 2], &self.points[n - 1], &tangents[n - 2]);
        }

        for (point, tangent) in self.points.iter_mut().zip(tangents) {
            point.set_tangent(tangent);
        }
        debug!(points = n, "fitted Catmull-Rom tangents");
    }
}

fn chord_slope<T: Vector<R>, R: Scalar>(left: &ControlPoint<T, R>, right: &ControlPoint<T, R>) -> T {
    (right.position().clone() - left.position().clone()) / (right.parameter() - left.parameter())
}

/// Tangent at one end of the segment `[left, right]` that zeroes the
/// second derivative at that end, given the tangent at the other end.
///
/// The condition `P'' = 0` gives `2 m_end + m_other = 3 d` at either end,
/// with `d` the chord slope.
fn natural_tangent<T: Vector<R>, R: Scalar>(
    left: &ControlPoint<T, R>,
    right: &ControlPoint<T, R>,
    other: &T,
) -> T {
    (chord_slope(left, right) * three() - other.clone()) / two()
}
