use tracing::debug;

use crate::error::{Result, SplineError};
use crate::geometry::Curve;
use crate::math::{from_count, Scalar, Vector};

use super::{Polyline, SampleParams};

/// Samples a curve at uniformly spaced parameters.
///
/// Samples cover the half-open domain `[t_min, t_max)`, so the end of the
/// domain itself is never evaluated.
pub struct SampleCurve {
    params: SampleParams,
}

impl SampleCurve {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(params: SampleParams) -> Self {
        Self { params }
    }

    /// Number of samples taken for a curve with `segments` pieces.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidSampling`] if `min_samples` is zero or
    /// exceeds `max_samples`.
    pub fn sample_count(&self, segments: usize) -> Result<usize> {
        let SampleParams {
            samples_per_segment,
            min_samples,
            max_samples,
        } = self.params;
        if min_samples == 0 {
            return Err(SplineError::InvalidSampling(
                "min_samples must be at least 1".into(),
            ));
        }
        if min_samples > max_samples {
            return Err(SplineError::InvalidSampling(format!(
                "min_samples ({min_samples}) exceeds max_samples ({max_samples})"
            )));
        }
        Ok(segments
            .saturating_mul(samples_per_segment)
            .clamp(min_samples, max_samples))
    }

    /// Executes the sampling, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the curve fails to
    /// evaluate inside its own domain.
    pub fn execute<C, T, R>(&self, curve: &mut C) -> Result<Polyline<T, R>>
    where
        C: Curve<T, R>,
        T: Vector<R>,
        R: Scalar,
    {
        let count = self.sample_count(curve.segment_count())?;
        let domain = curve.domain();
        let total: R = from_count(count);

        let mut polyline = Polyline {
            parameters: Vec::with_capacity(count),
            points: Vec::with_capacity(count),
        };
        for k in 0..count {
            let t = domain.t_min + domain.length() * from_count::<R>(k) / total;
            polyline.points.push(curve.evaluate(t)?);
            polyline.parameters.push(t);
        }

        debug!(samples = count, "sampled curve");
        Ok(polyline)
    }
}
