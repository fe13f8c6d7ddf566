use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::num::{
    NonZeroU32,
    NonZeroUsize
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};

use crate::manager::configerror::ConfigError;
use crate::manager::manager::Manager;
use crate::math::quadrature::quadraturerule::QuadratureRule;

pub const DEFAULT_THREAD_COUNT: usize = 1;
pub const DEFAULT_SUBDIVISIONS: u32 = 100;
pub const DEFAULT_ITERATIONS: u32 = 100;

fn default_thread_count() -> usize {
    DEFAULT_THREAD_COUNT
}

fn default_subdivisions() -> u32 {
    DEFAULT_SUBDIVISIONS
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

// ─────────────────────────────────────────────
// SimulationConfig
// ─────────────────────────────────────────────

/// A validated description of one simulation run.
///
/// `iterations` is only read by the benchmark harness; a single pass through
/// a pipeline does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    thread_count: NonZeroUsize,
    rule: QuadratureRule,
    subdivisions: NonZeroU32,
    iterations: NonZeroU32
}

impl SimulationConfig {
    pub fn new(thread_count: usize,
               rule: QuadratureRule,
               subdivisions: u32,
               iterations: u32) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig {
            thread_count: NonZeroUsize::new(thread_count).ok_or(ConfigError::InvalidThreadCount(thread_count))?,
            rule,
            subdivisions: NonZeroU32::new(subdivisions).ok_or(ConfigError::InvalidSubdivisionCount(subdivisions))?,
            iterations: NonZeroU32::new(iterations).ok_or(ConfigError::InvalidIterationCount(iterations))?
        })
    }

    pub fn thread_count(&self) -> NonZeroUsize {
        self.thread_count
    }

    pub fn rule(&self) -> QuadratureRule {
        self.rule
    }

    pub fn subdivisions(&self) -> NonZeroU32 {
        self.subdivisions
    }

    pub fn iterations(&self) -> NonZeroU32 {
        self.iterations
    }

    pub fn with_thread_count(self, thread_count: usize) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::new(thread_count, self.rule, self.subdivisions.get(), self.iterations.get())
    }

    pub fn with_rule(self, rule: QuadratureRule) -> SimulationConfig {
        SimulationConfig { rule, ..self }
    }

    pub fn with_subdivisions(self, subdivisions: u32) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::new(self.thread_count.get(), self.rule, subdivisions, self.iterations.get())
    }

    pub fn with_iterations(self, iterations: u32) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::new(self.thread_count.get(), self.rule, self.subdivisions.get(), iterations)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            thread_count: NonZeroUsize::MIN,
            rule: QuadratureRule::default(),
            subdivisions: NonZeroU32::new(DEFAULT_SUBDIVISIONS).unwrap_or(NonZeroU32::MIN),
            iterations: NonZeroU32::new(DEFAULT_ITERATIONS).unwrap_or(NonZeroU32::MIN)
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationConfigJsonProp {
    name: String,
    #[serde(default = "default_thread_count")]
    threads: usize,
    #[serde(default)]
    rule: QuadratureRule,
    #[serde(default = "default_subdivisions")]
    subdivisions: u32,
    #[serde(default = "default_iterations")]
    iterations: u32
}

fn simulation_config_from_json(json_value: serde_json::Value) -> Result<(String, SimulationConfig), ConfigError> {
    let json_prop: SimulationConfigJsonProp = ConfigError::from_json_or_json_parse_error(json_value)?;
    let config = SimulationConfig::new(
        json_prop.threads,
        json_prop.rule,
        json_prop.subdivisions,
        json_prop.iterations)?;
    Ok((json_prop.name, config))
}

// ─────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    simulation: Vec<serde_json::Value>
}

/// Named simulation presets loaded from JSON.
///
/// ```json
/// { "simulation": [ { "name": "fast", "threads": 4, "rule": "simpson", "subdivisions": 100 } ] }
/// ```
///
/// Every field except `name` falls back to the command line defaults.
pub struct Configuration {
    simulation_manager: Manager<SimulationConfig>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            simulation_manager: Manager::new(simulation_config_from_json)
        }
    }

    pub fn simulation_manager(&self) -> &Manager<SimulationConfig> {
        &self.simulation_manager
    }

    pub fn preset(&self, name: &str) -> Result<SimulationConfig, ConfigError> {
        self.simulation_manager.get(name)
    }

    pub fn from_reader<R>(&self, reader: R) -> Result<(), ConfigError> where
        R: Read {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.simulation_manager.insert_obj_from_json_vec(&json_prop.simulation)?;
        log::debug!("loaded {} simulation preset(s)", json_prop.simulation.len());
        Ok(())
    }

    pub fn from_path<P>(&self, file_path: P) -> Result<(), ConfigError> where
        P: AsRef<Path> {
        let file = File::open(file_path)?;
        self.from_reader(BufReader::new(file))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
