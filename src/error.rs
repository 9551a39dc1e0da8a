use thiserror::Error;

/// Errors reported by spline construction, evaluation and sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("a spline needs at least 2 control points, got {count}")]
    EmptyOrSingletonInput { count: usize },

    #[error("parameter {value} is out of range [{min}, {max})")]
    ParameterOutOfRange { value: f64, min: f64, max: f64 },

    #[error("control point {index} has parameter {current}, which does not follow {previous}")]
    NonMonotonicParameters {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("invalid sampling parameters: {0}")]
    InvalidSampling(String),
}

/// Convenience type alias for results using [`SplineError`].
pub type Result<T> = std::result::Result<T, SplineError>;
