mod sample_curve;

pub use sample_curve::SampleCurve;

/// Parameters controlling how densely a curve is sampled.
#[derive(Debug, Clone, Copy)]
pub struct SampleParams {
    /// Samples taken per polynomial segment.
    pub samples_per_segment: usize,
    /// Minimum number of samples for a whole curve.
    pub min_samples: usize,
    /// Maximum number of samples for a whole curve.
    pub max_samples: usize,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            samples_per_segment: 8,
            min_samples: 4,
            max_samples: 1024,
        }
    }
}

/// A polyline approximation of a curve, with the parameter of each vertex.
#[derive(Debug, Clone)]
pub struct Polyline<T, R> {
    /// Curve parameter of each vertex, increasing.
    pub parameters: Vec<R>,
    /// The ordered vertices of the polyline.
    pub points: Vec<T>,
}

impl<T, R> Default for Polyline<T, R> {
    fn default() -> Self {
        Self {
            parameters: Vec::new(),
            points: Vec::new(),
        }
    }
}

impl<T, R: Copy> Polyline<T, R> {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over `(parameter, point)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (R, &T)> + '_ {
        self.parameters.iter().copied().zip(self.points.iter())
    }
}
