//! Headless run loop: strokes, ticks, stats and snapshots

use anyhow::{Context, Result};
use log::info;
use tilesand_core::{Automaton, TickStats};

use crate::config::RunnerConfig;
use crate::snapshot;

/// What a finished run looked like
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u32,
    pub strokes_applied: usize,
    pub cells_processed: u64,
    pub swaps: u64,
    pub reactions: u64,
    /// Ticks that ended with no tile awake
    pub idle_ticks: u32,
    pub last: TickStats,
}

impl RunSummary {
    fn record(&mut self, stats: TickStats, asleep: bool) {
        self.ticks += 1;
        self.cells_processed += u64::from(stats.cells_processed);
        self.swaps += u64::from(stats.swaps);
        self.reactions += u64::from(stats.reactions);
        if asleep {
            self.idle_ticks += 1;
        }
        self.last = stats;
    }
}

pub struct Runner {
    config: RunnerConfig,
    automaton: Automaton,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Result<Self> {
        let automaton =
            Automaton::new(&config.simulation).context("Failed to create automaton")?;
        Ok(Self { config, automaton })
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }

    /// Run the configured number of ticks, then write any requested snapshots
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            seed: self.automaton.seed(),
            ..RunSummary::default()
        };

        if self.config.run.generate {
            self.automaton.generate(&self.config.simulation.generator);
        }

        let ticks = self.config.run.ticks;
        let stats_every = self.config.run.stats_every;
        info!("Running {} ticks", ticks);

        for tick in 0..ticks {
            summary.strokes_applied += self.paint_strokes(tick);
            let stats = self.automaton.update();
            summary.record(stats, self.automaton.wake_tiles().is_empty());

            if stats_every > 0 && (tick + 1) % stats_every == 0 {
                info!(
                    "tick {:>6}: {:>2} tiles, {:>6} cells, {:>5} active, {:>5} swaps, {:>4} reactions",
                    stats.tick,
                    stats.active_tiles,
                    stats.cells_processed,
                    stats.active_cells,
                    stats.swaps,
                    stats.reactions
                );
            }
        }

        if let Some(path) = &self.config.run.png {
            snapshot::save_png(&self.automaton, path)?;
        }
        if let Some(path) = &self.config.run.ascii {
            snapshot::save_ascii(&self.automaton, path)?;
        }

        info!(
            "Finished {} ticks: {} cells processed, {} swaps, {} reactions, {} idle ticks",
            summary.ticks,
            summary.cells_processed,
            summary.swaps,
            summary.reactions,
            summary.idle_ticks
        );
        Ok(summary)
    }

    fn paint_strokes(&mut self, tick: u32) -> usize {
        let mut applied = 0;
        for stroke in self.config.strokes_at(tick) {
            let painted =
                self.automaton
                    .apply_brush(stroke.kind, stroke.x, stroke.y, stroke.diameter);
            if painted == 0 {
                log::warn!(
                    "Stroke {} at ({}, {}) missed the world",
                    stroke.kind.name(),
                    stroke.x,
                    stroke.y
                );
            }
            applied += 1;
        }
        applied
    }
}
