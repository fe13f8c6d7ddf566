use std::collections::TryReserveError;

use thiserror::Error;

use crate::math::interpolation::sampleindexerror::SampleIndexError;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("interpolation failed: {0}")]
    Index(#[from] SampleIndexError),
    #[error("failed to allocate storage for {len} samples")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError
    },
    #[error("failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError)
}
