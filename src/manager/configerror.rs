use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),
    #[error("subdivision count must be at least 1, got {0}")]
    InvalidSubdivisionCount(u32),
    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterationCount(u32)
}

impl ConfigError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self> where
        T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ConfigError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ConfigError {
        ConfigError::NameNotFoundError(name.to_owned())
    }
}
