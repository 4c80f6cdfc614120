//! Runner configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `tilesand.ron` (or the file given on the command line), if it exists
//! 3. Environment variables prefixed with `TILESAND_`
//!
//! Example environment variable: `TILESAND_RUN__TICKS=1200`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tilesand_core::SimulationConfig;
use tilesand_simulation::MaterialKind;

pub const DEFAULT_CONFIG_FILE: &str = "tilesand";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub run: RunConfig,

    /// Brush strokes applied while running
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub ticks: u32,
    /// Log a stats line every this many ticks; 0 turns it off
    pub stats_every: u32,
    /// Carve a cave before the first tick
    pub generate: bool,
    pub png: Option<PathBuf>,
    pub ascii: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            stats_every: 60,
            generate: true,
            png: None,
            ascii: None,
        }
    }
}

/// One brush application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub kind: MaterialKind,
    pub x: i32,
    pub y: i32,
    #[serde(default = "Stroke::default_diameter")]
    pub diameter: u32,
    /// Applied just before this tick runs; 0 paints before the first tick
    #[serde(default)]
    pub at_tick: u32,
}

impl Stroke {
    fn default_diameter() -> u32 {
        5
    }

    /// Parse `kind:x:y[:diameter][@tick]`, e.g. `water:128:20:9@30`
    pub fn parse(text: &str) -> Result<Self> {
        let (shape, at_tick) = match text.split_once('@') {
            Some((shape, tick)) => (
                shape,
                tick.parse()
                    .with_context(|| format!("Invalid stroke tick in '{text}'"))?,
            ),
            None => (text, 0),
        };

        let parts: Vec<&str> = shape.split(':').collect();
        if !(3..=4).contains(&parts.len()) {
            anyhow::bail!("Stroke '{text}' should look like kind:x:y[:diameter][@tick]");
        }
        let kind = parts[0].parse::<MaterialKind>()?;
        let number = |s: &str| -> Result<i32> {
            s.parse()
                .with_context(|| format!("Invalid number '{s}' in stroke '{text}'"))
        };
        let diameter = match parts.get(3) {
            Some(d) => d
                .parse()
                .with_context(|| format!("Invalid diameter in stroke '{text}'"))?,
            None => Self::default_diameter(),
        };

        Ok(Self {
            kind,
            x: number(parts[1])?,
            y: number(parts[2])?,
            diameter,
            at_tick,
        })
    }
}

impl RunnerConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `file` in RON (optional, won't error if missing)
    /// 3. Environment variables prefixed with `TILESAND_` (highest priority)
    pub fn load(file: impl AsRef<Path>) -> Result<Self> {
        let defaults = SimulationConfig::default();
        let run = RunConfig::default();
        let file = file.as_ref().to_string_lossy().into_owned();

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("simulation.ring_size", defaults.ring_size as i64)?
            .set_default("simulation.generator.density", defaults.generator.density)?
            .set_default("simulation.generator.top_closed", false)?
            .set_default("simulation.generator.bottom_closed", false)?
            .set_default("simulation.generator.left_closed", false)?
            .set_default("simulation.generator.right_closed", false)?
            .set_default("run.ticks", i64::from(run.ticks))?
            .set_default("run.stats_every", i64::from(run.stats_every))?
            .set_default("run.generate", run.generate)?
            // Layer 2: Config file
            .add_source(File::with_name(&file).format(FileFormat::Ron).required(false))
            // Layer 3: Environment variables (TILESAND_RUN__TICKS, etc.)
            .add_source(Environment::with_prefix("TILESAND").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;
        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config
            .simulation
            .validate()
            .context("Invalid simulation configuration")?;
        Ok(config)
    }

    /// Strokes due right before `tick`
    pub fn strokes_at(&self, tick: u32) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(move |s| s.at_tick == tick)
    }
}
