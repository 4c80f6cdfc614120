//! Errors raised while building an automaton from configuration

use std::path::PathBuf;

use thiserror::Error;
use tilesand_simulation::RngError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse simulation config")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize simulation config")]
    Serialize(#[from] ron::Error),

    #[error(transparent)]
    Rng(#[from] RngError),

    #[error("cave density {0} is outside 0.0..=1.0")]
    InvalidDensity(f64),
}
