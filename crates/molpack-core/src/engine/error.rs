use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl EngineError {
    pub(crate) fn zero_direction() -> Self {
        Self::DegenerateInput("direction vector has zero length")
    }
}
