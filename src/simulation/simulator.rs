use crate::configuration::SimulationConfig;
use crate::math::interpolation::sampletable::SampleTable;

use super::parallelpipeline::ParallelPipeline;
use super::pipeline::{
    IntegrationResult,
    Kinematics,
    Pipeline
};
use super::sequentialpipeline::SequentialPipeline;
use super::simulationerror::SimulationError;

/// Runs the pipeline chosen by a [`SimulationConfig`].
///
/// A thread count of one selects [`SequentialPipeline`]; anything larger
/// selects [`ParallelPipeline`] with a pool of that many workers. The pool
/// is built once here and reused by every run.
pub struct Simulator {
    config: SimulationConfig,
    pipeline: Box<dyn Pipeline>
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Simulator, SimulationError> {
        let rule = config.rule();
        let subdivisions = config.subdivisions();

        if rule.is_degraded_by(subdivisions) {
            log::warn!(
                "{rule} with an odd subdivision count ({subdivisions}) is not the composite rule, results are less accurate");
        }

        let pipeline: Box<dyn Pipeline> = if config.thread_count().get() == 1 {
            Box::new(SequentialPipeline::new(rule, subdivisions))
        } else {
            Box::new(ParallelPipeline::new(rule, subdivisions, config.thread_count())?)
        };

        log::debug!(
            "{} pipeline: threads {} rule {rule} subdivisions {subdivisions}",
            pipeline.name(),
            config.thread_count());

        Ok(Simulator { config, pipeline })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn pipeline_name(&self) -> &'static str {
        self.pipeline.name()
    }

    pub fn integrate(&self, acceleration: &SampleTable) -> Result<IntegrationResult, SimulationError> {
        self.pipeline.run(acceleration)
    }

    pub fn run(&self, acceleration: &SampleTable) -> Result<Kinematics, SimulationError> {
        self.integrate(acceleration).map(|result| result.kinematics())
    }
}

/// Computes the final velocity and position for `acceleration` in one pass.
///
/// For repeated runs build a [`Simulator`] once instead, so the worker pool is
/// not rebuilt every time.
pub fn run(config: &SimulationConfig, acceleration: &SampleTable) -> Result<Kinematics, SimulationError> {
    Simulator::new(*config)?.run(acceleration)
}

#[cfg(test)]
mod tests {
    use crate::math::quadrature::quadraturerule::QuadratureRule;

    use super::*;

    #[test]
    fn thread_count_selects_pipeline() {
        let sequential = SimulationConfig::new(1, QuadratureRule::Simpson, 4, 1).unwrap();
        let parallel = sequential.with_thread_count(2).unwrap();

        assert_eq!(Simulator::new(sequential).unwrap().pipeline_name(), "sequential");
        assert_eq!(Simulator::new(parallel).unwrap().pipeline_name(), "parallel");
    }

    #[test]
    fn run_returns_final_state() {
        let config = SimulationConfig::new(1, QuadratureRule::LeftRiemann, 1, 1).unwrap();
        let acceleration = SampleTable::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();

        let kinematics = run(&config, &acceleration).unwrap();

        assert_eq!(kinematics, Kinematics { final_velocity: 3.0, final_position: 1.0 });
    }
}
