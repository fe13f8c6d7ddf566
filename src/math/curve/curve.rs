use crate::math::interpolation::sampleindexerror::SampleIndexError;

/// Anything that maps a point on the time axis to a value.
///
/// Plain closures are curves that can never fail. Sampled tables fail when
/// asked for a point outside the range they cover.
pub trait Curve {
    fn value(&self, x: f64) -> Result<f64, SampleIndexError>;
}

impl<F> Curve for F where
    F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> Result<f64, SampleIndexError> {
        Ok(self(x))
    }
}
