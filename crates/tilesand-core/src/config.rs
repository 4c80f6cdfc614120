//! Simulation configuration
//!
//! Stored as RON. Every field has a default, so an empty `()` document is a
//! valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tilesand_simulation::{ByteRing, DEFAULT_RING_SIZE};

use crate::error::ConfigError;
use crate::world::GeneratorOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the simulation byte ring; `None` draws a fresh one
    pub seed: Option<u64>,
    /// Length of the byte ring, a power of two
    pub ring_size: usize,
    /// Cave generation used by `Automaton::generate`
    pub generator: GeneratorOptions,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ring_size: DEFAULT_RING_SIZE,
            generator: GeneratorOptions::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Reject a ring size that is not a power of two and a density outside 0..=1
    pub fn validate(&self) -> Result<(), ConfigError> {
        ByteRing::check_size(self.ring_size)?;
        let density = self.generator.density;
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity(density));
        }
        Ok(())
    }
}
