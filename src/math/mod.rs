mod polynomial;

pub use polynomial::Polynomial;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{Float, Zero};

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Scalar type used for curve parameters and coefficients.
pub trait Scalar: Float + Debug {}

impl<R> Scalar for R where R: Float + Debug {}

/// A value in a vector space over the scalar `R`.
///
/// Anything with a zero, addition, subtraction and scaling by `R` qualifies,
/// which covers plain floats as well as `nalgebra` vectors.
pub trait Vector<R: Scalar>:
    Clone
    + Zero
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<R, Output = Self>
    + Div<R, Output = Self>
{
}

impl<T, R> Vector<R> for T
where
    R: Scalar,
    T: Clone
        + Zero
        + Add<T, Output = T>
        + Sub<T, Output = T>
        + Mul<R, Output = T>
        + Div<R, Output = T>,
{
}

/// `2` in the scalar type.
#[inline]
pub(crate) fn two<R: Scalar>() -> R {
    R::one() + R::one()
}

/// `3` in the scalar type.
#[inline]
pub(crate) fn three<R: Scalar>() -> R {
    two::<R>() + R::one()
}

/// Converts a count or index to the scalar type, NaN if it does not fit.
pub(crate) fn from_count<R: Scalar>(n: usize) -> R {
    num_traits::cast(n).unwrap_or_else(R::nan)
}

/// Widens a scalar for error reporting.
pub(crate) fn to_f64<R: Scalar>(value: R) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
