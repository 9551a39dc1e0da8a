use std::sync::atomic::{AtomicU64, Ordering};

use crate::math::{Scalar, Vector};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(0);

/// Stamp identifying one state of a control point's fields.
///
/// Every construction and every mutation draws a new stamp, so two points
/// carrying the same revision always hold the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Revision(u64);

impl Revision {
    fn next() -> Self {
        Self(NEXT_REVISION.fetch_add(1, Ordering::Relaxed))
    }
}

/// A point the spline must pass through.
///
/// Holds a position in space, the speed (first derivative) the curve has
/// there, and the parameter ("time") at which the curve reaches it. Each
/// setter marks the point as changed, so the spline rebuilds the segments
/// touching it before they are evaluated again.
#[derive(Debug, Clone)]
pub struct ControlPoint<T, R> {
    position: T,
    tangent: T,
    parameter: R,
    revision: Revision,
}

impl<T: Vector<R>, R: Scalar> ControlPoint<T, R> {
    /// Creates a fully specified control point.
    #[must_use]
    pub fn new(position: T, tangent: T, parameter: R) -> Self {
        Self {
            position,
            tangent,
            parameter,
            revision: Revision::next(),
        }
    }

    /// Creates a control point with zero tangent and zero parameter.
    #[must_use]
    pub fn from_position(position: T) -> Self {
        Self::new(position, T::zero(), R::zero())
    }

    /// Creates a control point at `parameter` with zero tangent.
    #[must_use]
    pub fn at(position: T, parameter: R) -> Self {
        Self::new(position, T::zero(), parameter)
    }

    /// Returns the position of the point.
    #[must_use]
    pub fn position(&self) -> &T {
        &self.position
    }

    /// Returns the first derivative of the spline at this point.
    #[must_use]
    pub fn tangent(&self) -> &T {
        &self.tangent
    }

    /// Returns the parameter at which the spline equals [`Self::position`].
    #[must_use]
    pub fn parameter(&self) -> R {
        self.parameter
    }

    /// Replaces the position and marks the point as changed.
    pub fn set_position(&mut self, position: T) {
        self.position = position;
        self.touch();
    }

    /// Replaces the tangent and marks the point as changed.
    pub fn set_tangent(&mut self, tangent: T) {
        self.tangent = tangent;
        self.touch();
    }

    /// Replaces the parameter and marks the point as changed.
    pub fn set_parameter(&mut self, parameter: R) {
        self.parameter = parameter;
        self.touch();
    }

    pub(crate) fn revision(&self) -> Revision {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = Revision::next();
    }
}
