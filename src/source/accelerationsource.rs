use crate::math::interpolation::sampletable::SampleTable;

use super::sourceerror::SourceError;

/// Supplies one acceleration sample per whole second, starting at `t = 0`.
pub trait AccelerationSource {
    fn load(&self) -> Result<SampleTable, SourceError>;
}

impl AccelerationSource for Vec<f64> {
    fn load(&self) -> Result<SampleTable, SourceError> {
        SampleTable::new(self.clone()).ok_or(SourceError::Empty)
    }
}
