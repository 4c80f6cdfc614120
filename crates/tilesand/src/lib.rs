//! Headless runner for the tilesand automaton
//!
//! Loads layered configuration, paints scripted brush strokes, steps the
//! world and writes PNG or ASCII snapshots of the result.

pub mod config;
pub mod runner;
pub mod snapshot;

pub use config::{RunnerConfig, Stroke};
pub use runner::{RunSummary, Runner};
