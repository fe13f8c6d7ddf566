use std::collections::TryReserveError;

use crate::math::curve::curve::Curve;
use crate::math::interpolation::sampleindexerror::SampleIndexError;

/// Values sampled once per whole second, starting at `t = 0`.
///
/// Index `i` of the table is the x value and the sample stored there is the y
/// value. Between two whole seconds the table is read as the straight line
/// joining the neighbouring samples. A table always holds at least one
/// sample.
///
/// ```
/// use trainsim::math::curve::curve::Curve;
/// use trainsim::math::interpolation::sampletable::SampleTable;
///
/// let table = SampleTable::new(vec![0.0, 1.5, 3.0]).unwrap();
///
/// assert_eq!(table.value(1.0).unwrap(), 1.5);
/// assert_eq!(table.value(1.5).unwrap(), 2.25);
/// assert!(table.value(2.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    samples: Vec<f64>
}

impl SampleTable {
    /// Returns `None` for an empty sample list.
    pub fn new(samples: Vec<f64>) -> Option<SampleTable> {
        if samples.is_empty() {
            None
        } else {
            Some(SampleTable { samples })
        }
    }

    /// Starts a table holding only `origin`, with room reserved for
    /// `capacity` samples in total.
    ///
    /// The reservation is done up front so that growing the table later never
    /// reallocates, and so that running out of memory surfaces here as an
    /// error instead of an abort halfway through a computation.
    pub fn with_origin(origin: f64, capacity: usize) -> Result<SampleTable, TryReserveError> {
        let mut samples = Vec::new();
        samples.try_reserve_exact(capacity.max(1))?;
        samples.push(origin);
        Ok(SampleTable { samples })
    }

    pub fn push(&mut self, y: f64) {
        self.samples.push(y);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn last(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    /// Reads the sample stored at a whole-number position.
    ///
    /// Negative, non-finite and past-the-end positions are rejected rather
    /// than saturated into range by the float to integer cast.
    fn sample_at(&self, index: f64) -> Result<f64, SampleIndexError> {
        if !index.is_finite() || index < 0.0 || index >= self.samples.len() as f64 {
            return Err(SampleIndexError::new(index, self.samples.len()));
        }
        Ok(self.samples[index as usize])
    }

    pub fn interpolate(&self, x: f64) -> Result<f64, SampleIndexError> {
        let x0 = x.floor();
        if x0 == x {
            return self.sample_at(x);
        }

        let y0 = self.sample_at(x0)?;
        let y1 = self.sample_at(x0 + 1.0)?;

        // consecutive samples are one second apart, so the usual
        // (y1 - y0) / (x1 - x0) slope reduces to y1 - y0
        Ok(y0 + (x - x0) * (y1 - y0))
    }
}

impl Curve for SampleTable {
    fn value(&self, x: f64) -> Result<f64, SampleIndexError> {
        self.interpolate(x)
    }
}
