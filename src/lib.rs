pub mod error;
pub mod geometry;
pub mod math;
pub mod sampling;

pub use error::{Result, SplineError};
pub use geometry::{ControlPoint, Curve, CurveDomain, Spline};
pub use math::{Polynomial, Scalar, Vector};
pub use sampling::{Polyline, SampleCurve, SampleParams};
