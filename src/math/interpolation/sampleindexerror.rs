use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("sample index {index} is outside of table range [0, {len})")]
pub struct SampleIndexError {
    index: f64,
    len: usize
}

impl SampleIndexError {
    pub fn new(index: f64, len: usize) -> SampleIndexError {
        SampleIndexError { index, len }
    }

    pub fn index(&self) -> f64 {
        self.index
    }

    pub fn table_len(&self) -> usize {
        self.len
    }
}
