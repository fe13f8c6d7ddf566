use std::num::NonZeroU32;

use crate::math::interpolation::sampletable::SampleTable;
use crate::math::quadrature::quadraturerule::QuadratureRule;

use super::pipeline::{
    allocate_velocity,
    interval_delta,
    IntegrationResult,
    Pipeline
};
use super::simulationerror::SimulationError;

/// Single-threaded pipeline: one forward scan per derivation.
pub struct SequentialPipeline {
    rule: QuadratureRule,
    subdivisions: NonZeroU32
}

impl SequentialPipeline {
    pub fn new(rule: QuadratureRule, subdivisions: NonZeroU32) -> SequentialPipeline {
        SequentialPipeline { rule, subdivisions }
    }

    fn derive_velocity(&self, acceleration: &SampleTable) -> Result<SampleTable, SimulationError> {
        let mut velocity = allocate_velocity(acceleration.len())?;
        let mut rolling = 0.0;
        for sec in 1..acceleration.len() {
            rolling += interval_delta(self.rule, self.subdivisions, sec, acceleration)?;
            velocity.push(rolling);
        }
        Ok(velocity)
    }

    fn derive_position(&self, velocity: &SampleTable) -> Result<f64, SimulationError> {
        let mut position = 0.0;
        for sec in 1..velocity.len() {
            position += interval_delta(self.rule, self.subdivisions, sec, velocity)?;
        }
        Ok(position)
    }
}

impl Pipeline for SequentialPipeline {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn run(&self, acceleration: &SampleTable) -> Result<IntegrationResult, SimulationError> {
        let velocity = self.derive_velocity(acceleration)?;
        let final_velocity = velocity.last();
        let final_position = self.derive_position(&velocity)?;
        Ok(IntegrationResult::new(velocity, final_velocity, final_position))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn pipeline(rule: QuadratureRule, subdivisions: u32) -> SequentialPipeline {
        SequentialPipeline::new(rule, NonZeroU32::new(subdivisions).unwrap())
    }

    #[test]
    fn left_riemann_single_step() {
        let acceleration = SampleTable::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();

        let result = pipeline(QuadratureRule::LeftRiemann, 1).run(&acceleration).unwrap();

        assert_eq!(result.velocity().samples(), &[0.0, 0.0, 1.0, 3.0]);
        assert_eq!(result.final_velocity(), 3.0);
        assert_eq!(result.final_position(), 1.0);
    }

    #[test]
    fn single_sample_has_no_interval() {
        let acceleration = SampleTable::new(vec![5.0]).unwrap();

        let result = pipeline(QuadratureRule::Simpson, 4).run(&acceleration).unwrap();

        assert_eq!(result.velocity().samples(), &[0.0]);
        assert_eq!(result.final_velocity(), 0.0);
        assert_eq!(result.final_position(), 0.0);
    }

    #[test]
    fn constant_acceleration() {
        // a = 2: v(t) = 2t, x(t) = t^2 over four seconds
        let acceleration = SampleTable::new(vec![2.0; 5]).unwrap();

        let result = pipeline(QuadratureRule::Trapezoidal, 10).run(&acceleration).unwrap();

        assert_relative_eq!(result.final_velocity(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(result.final_position(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn velocity_is_running_sum() {
        let acceleration = SampleTable::new(vec![1.0, 3.0, -2.0, 0.5, 4.0]).unwrap();
        let rule = QuadratureRule::MidRiemann;
        let subdivisions = NonZeroU32::new(8).unwrap();

        let result = SequentialPipeline::new(rule, subdivisions).run(&acceleration).unwrap();

        let velocity = result.velocity().samples();
        assert_eq!(velocity.len(), acceleration.len());
        assert_eq!(velocity[0], 0.0);
        for sec in 1..velocity.len() {
            let delta = interval_delta(rule, subdivisions, sec, &acceleration).unwrap();
            assert_relative_eq!(velocity[sec], velocity[sec - 1] + delta, epsilon = 1e-12);
        }
        assert_eq!(result.final_velocity(), velocity[velocity.len() - 1]);
    }
}
