use crate::error::Result;
use crate::math::{Scalar, Vector};

/// Parameter domain for a curve.
///
/// The domain is half-open: `t_min` is a valid parameter, `t_max` is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain<R> {
    /// Start of the parameter range.
    pub t_min: R,
    /// End of the parameter range (exclusive).
    pub t_max: R,
}

impl<R: Scalar> CurveDomain<R> {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: R, t_max: R) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies in `[t_min, t_max)`. NaN is never contained.
    #[must_use]
    pub fn contains(&self, t: R) -> bool {
        self.t_min <= t && t < self.t_max
    }

    /// Returns `t_max - t_min`.
    #[must_use]
    pub fn length(&self) -> R {
        self.t_max - self.t_min
    }
}

/// Trait for parametric curves over a vector space `T`.
///
/// Evaluation takes `&mut self` because implementations may rebuild cached
/// state on demand.
pub trait Curve<T: Vector<R>, R: Scalar> {
    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn evaluate(&mut self, t: R) -> Result<T>;

    /// Evaluates the first derivative at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn derivative(&mut self, t: R) -> Result<T>;

    /// Evaluates the second derivative at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn second_derivative(&mut self, t: R) -> Result<T>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain<R>;

    /// Returns the number of polynomial pieces making up the curve.
    fn segment_count(&self) -> usize {
        1
    }
}
