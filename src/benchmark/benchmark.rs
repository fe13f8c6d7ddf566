use std::num::NonZeroU32;
use std::time::Instant;

use serde::Serialize;

use crate::configuration::SimulationConfig;
use crate::math::interpolation::sampletable::SampleTable;
use crate::simulation::pipeline::Kinematics;
use crate::simulation::simulationerror::SimulationError;
use crate::simulation::simulator::Simulator;

use super::logtimer::LogTimer;
use super::timing::{
    Timing,
    TimingSummary
};

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub config: SimulationConfig,
    pub pipeline: &'static str,
    pub samples: usize,
    pub kinematics: Kinematics,
    pub timing: TimingSummary
}

/// Times repeated runs of a [`Simulator`] over the same acceleration table.
pub struct Benchmark {
    simulator: Simulator,
    iterations: NonZeroU32,
    log_timer: LogTimer
}

impl Benchmark {
    pub fn new(simulator: Simulator) -> Benchmark {
        let iterations = simulator.config().iterations();
        Benchmark::with_iterations(simulator, iterations)
    }

    pub fn with_iterations(simulator: Simulator, iterations: NonZeroU32) -> Benchmark {
        Benchmark { simulator, iterations, log_timer: LogTimer::default() }
    }

    pub fn with_log_timer(self, log_timer: LogTimer) -> Benchmark {
        Benchmark { log_timer, ..self }
    }

    pub fn from_config(config: SimulationConfig) -> Result<Benchmark, SimulationError> {
        Ok(Benchmark::new(Simulator::new(config)?))
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Runs every iteration and keeps the result of the last one.
    ///
    /// The first failing iteration ends the benchmark with its error.
    pub fn run(&mut self, acceleration: &SampleTable) -> Result<BenchmarkReport, SimulationError> {
        let mut timing = Timing::new();
        let mut kinematics = Kinematics::default();

        log::info!(
            "length: {} subdivisions: {} iterations: {}",
            acceleration.len(),
            self.simulator.config().subdivisions(),
            self.iterations);

        for iteration in 0..self.iterations.get() {
            let start = Instant::now();
            kinematics = self.simulator.run(acceleration)?;
            timing.update(start.elapsed());

            if self.log_timer.update() {
                log::info!("iteration: {iteration}\n{timing}");
            }
        }

        Ok(BenchmarkReport {
            config: *self.simulator.config(),
            pipeline: self.simulator.pipeline_name(),
            samples: acceleration.len(),
            kinematics,
            timing: timing.summary()
        })
    }
}
