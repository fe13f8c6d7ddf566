use std::num::{
    NonZeroU32,
    NonZeroUsize
};

use rayon::prelude::*;
use rayon::{
    ThreadPool,
    ThreadPoolBuilder
};

use crate::math::interpolation::sampleindexerror::SampleIndexError;
use crate::math::interpolation::sampletable::SampleTable;
use crate::math::quadrature::quadraturerule::QuadratureRule;

use super::pipeline::{
    allocate_velocity,
    interval_delta,
    IntegrationResult,
    Pipeline
};
use super::simulationerror::SimulationError;

/// Pipeline that spreads the per-second integrals over its own worker pool.
///
/// Velocity is derived in two phases: every second's increment is integrated
/// independently into its own slot, then a single-threaded scan turns the
/// increments into running totals. Position needs no table, so its
/// per-second integrals are summed by a parallel reduction. The reduction
/// order is unspecified, so the last bits of the position may differ from
/// the sequential pipeline.
pub struct ParallelPipeline {
    rule: QuadratureRule,
    subdivisions: NonZeroU32,
    pool: ThreadPool
}

impl ParallelPipeline {
    pub fn new(rule: QuadratureRule,
               subdivisions: NonZeroU32,
               thread_count: NonZeroUsize) -> Result<ParallelPipeline, SimulationError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(thread_count.get())
            .thread_name(|index| format!("trainsim-worker-{index}"))
            .build()?;
        Ok(ParallelPipeline { rule, subdivisions, pool })
    }

    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// `diffs[sec - 1]` receives the increment of second `sec`.
    fn velocity_increments(&self, acceleration: &SampleTable) -> Result<Vec<f64>, SimulationError> {
        let count = acceleration.len() - 1;
        let mut diffs = Vec::new();
        diffs
            .try_reserve_exact(count)
            .map_err(|source| SimulationError::Allocation { len: count, source })?;
        diffs.resize(count, 0.0);

        diffs
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(index, slot)| -> Result<(), SampleIndexError> {
                *slot = interval_delta(self.rule, self.subdivisions, index + 1, acceleration)?;
                Ok(())
            })?;
        Ok(diffs)
    }

    fn derive_velocity(&self, acceleration: &SampleTable) -> Result<SampleTable, SimulationError> {
        let diffs = self.velocity_increments(acceleration)?;
        log::trace!("integrated {} velocity increments", diffs.len());

        let mut velocity = allocate_velocity(acceleration.len())?;
        let mut rolling = 0.0;
        for diff in diffs {
            rolling += diff;
            velocity.push(rolling);
        }
        Ok(velocity)
    }

    fn derive_position(&self, velocity: &SampleTable) -> Result<f64, SimulationError> {
        let position = (1..velocity.len())
            .into_par_iter()
            .map(|sec| interval_delta(self.rule, self.subdivisions, sec, velocity))
            .try_reduce(|| 0.0, |lhs, rhs| Ok(lhs + rhs))?;
        Ok(position)
    }
}

impl Pipeline for ParallelPipeline {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn run(&self, acceleration: &SampleTable) -> Result<IntegrationResult, SimulationError> {
        self.pool.install(|| -> Result<IntegrationResult, SimulationError> {
            let velocity = self.derive_velocity(acceleration)?;
            let final_velocity = velocity.last();
            let final_position = self.derive_position(&velocity)?;
            Ok(IntegrationResult::new(velocity, final_velocity, final_position))
        })
    }
}
