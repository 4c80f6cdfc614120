//! Tile-scheduled falling-sand automaton
//!
//! - [`world::Automaton`]: the 256×256 grid, its tick loop and wake mask
//! - [`world::reactions`]: what happens when two kinds meet
//! - [`world::processors`]: how each kind moves and grows
//! - Brushes, cave generation and whole-world commands as `Automaton` methods
//! - [`SimulationConfig`]: RON-backed construction settings

pub mod config;
pub mod error;
pub mod world;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use world::{Automaton, GeneratorOptions, TickStats};

pub use tilesand_simulation as simulation;
