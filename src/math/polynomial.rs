use super::{three, two, Scalar, Vector};

/// A cubic polynomial with vector-valued coefficients.
///
/// `P(t) = c0 + c1 * t + c2 * t^2 + c3 * t^3`
///
/// Coefficients live in the absolute parameter domain: `t` is the curve
/// parameter itself, not a `[0, 1]` local coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    coefficients: [T; 4],
}

impl<T> Polynomial<T> {
    /// Creates a polynomial from `[c0, c1, c2, c3]`.
    #[must_use]
    pub fn new(coefficients: [T; 4]) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients `[c0, c1, c2, c3]`.
    #[must_use]
    pub fn coefficients(&self) -> &[T; 4] {
        &self.coefficients
    }

    /// Fits the cubic Hermite polynomial through `(t0, p0)` and `(t1, p1)`
    /// with first derivatives `m0` and `m1` at those parameters.
    ///
    /// The fit is done in the local variable `s = t - t0` and then shifted
    /// back so the coefficients apply to `t` directly. `t0` and `t1` must
    /// differ.
    #[must_use]
    pub fn hermite<R: Scalar>(p0: &T, m0: &T, t0: R, p1: &T, m1: &T, t1: R) -> Self
    where
        T: Vector<R>,
    {
        let h = t1 - t0;
        let slope = (p1.clone() - p0.clone()) / h;

        // Local form: p0 + m0 s + a2 s^2 + a3 s^3
        let a2 = (slope.clone() * three() - m0.clone() * two() - m1.clone()) / h;
        let a3 = (m0.clone() + m1.clone() - slope * two()) / (h * h);

        let t0_sq = t0 * t0;
        let c3 = a3.clone();
        let c2 = a2.clone() - a3.clone() * (three::<R>() * t0);
        let c1 = m0.clone() - a2.clone() * (two::<R>() * t0) + a3.clone() * (three::<R>() * t0_sq);
        let c0 = p0.clone() - m0.clone() * t0 + a2 * t0_sq - a3 * (t0_sq * t0);

        Self::new([c0, c1, c2, c3])
    }

    /// Evaluates the polynomial at `t`.
    #[must_use]
    pub fn evaluate<R: Scalar>(&self, t: R) -> T
    where
        T: Vector<R>,
    {
        let [c0, c1, c2, c3] = &self.coefficients;
        ((c3.clone() * t + c2.clone()) * t + c1.clone()) * t + c0.clone()
    }

    /// Evaluates the first derivative at `t`.
    #[must_use]
    pub fn derivative_at<R: Scalar>(&self, t: R) -> T
    where
        T: Vector<R>,
    {
        let [_, c1, c2, c3] = &self.coefficients;
        (c3.clone() * (three::<R>() * t) + c2.clone() * two()) * t + c1.clone()
    }

    /// Evaluates the second derivative at `t`.
    #[must_use]
    pub fn second_derivative_at<R: Scalar>(&self, t: R) -> T
    where
        T: Vector<R>,
    {
        let [_, _, c2, c3] = &self.coefficients;
        let six = three::<R>() * two();
        c3.clone() * (six * t) + c2.clone() * two()
    }

    /// Returns the first derivative as a polynomial (its cubic term is zero).
    #[must_use]
    pub fn derivative<R: Scalar>(&self) -> Self
    where
        T: Vector<R>,
    {
        let [_, c1, c2, c3] = &self.coefficients;
        Self::new([
            c1.clone(),
            c2.clone() * two(),
            c3.clone() * three(),
            T::zero(),
        ])
    }

    /// Returns the second derivative as a polynomial.
    #[must_use]
    pub fn second_derivative<R: Scalar>(&self) -> Self
    where
        T: Vector<R>,
    {
        self.derivative::<R>().derivative::<R>()
    }
}
