use std::num::NonZeroU32;

use serde::Serialize;

use crate::math::interpolation::sampleindexerror::SampleIndexError;
use crate::math::interpolation::sampletable::SampleTable;
use crate::math::quadrature::quadraturerule::QuadratureRule;

use super::simulationerror::SimulationError;

/// Final state of the train after the whole acceleration profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Kinematics {
    pub final_velocity: f64,
    pub final_position: f64
}

/// Everything one pass of a pipeline produces.
///
/// The velocity table is kept so callers can inspect it; it is rebuilt from
/// scratch on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationResult {
    velocity: SampleTable,
    final_velocity: f64,
    final_position: f64
}

impl IntegrationResult {
    pub fn new(velocity: SampleTable, final_velocity: f64, final_position: f64) -> IntegrationResult {
        IntegrationResult { velocity, final_velocity, final_position }
    }

    pub fn velocity(&self) -> &SampleTable {
        &self.velocity
    }

    pub fn final_velocity(&self) -> f64 {
        self.final_velocity
    }

    pub fn final_position(&self) -> f64 {
        self.final_position
    }

    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            final_velocity: self.final_velocity,
            final_position: self.final_position
        }
    }
}

/// Derives velocity from acceleration, then position from velocity.
pub trait Pipeline: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(&self, acceleration: &SampleTable) -> Result<IntegrationResult, SimulationError>;
}

/// Integral of `table` over the second ending at `sec`.
pub(crate) fn interval_delta(rule: QuadratureRule,
                             subdivisions: NonZeroU32,
                             sec: usize,
                             table: &SampleTable) -> Result<f64, SampleIndexError> {
    rule.integrate((sec - 1) as f64, sec as f64, subdivisions, table)
}

/// Velocity table holding only the initial rest state, sized for `len`
/// samples.
pub(crate) fn allocate_velocity(len: usize) -> Result<SampleTable, SimulationError> {
    SampleTable::with_origin(0.0, len).map_err(|source| SimulationError::Allocation { len, source })
}
