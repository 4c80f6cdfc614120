use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tilesand::config::DEFAULT_CONFIG_FILE;
use tilesand::{Runner, RunnerConfig, Stroke};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (RON), extension optional
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Number of ticks to run
    #[arg(long)]
    ticks: Option<u32>,

    /// Seed for the simulation byte ring
    #[arg(long)]
    seed: Option<u64>,

    /// Cave wall density, 0.0 to 1.0
    #[arg(long)]
    density: Option<f64>,

    /// Start from an empty world instead of a generated cave
    #[arg(long)]
    no_generate: bool,

    /// Brush stroke as kind:x:y[:diameter][@tick], repeatable
    #[arg(long = "stroke", value_parser = Stroke::parse)]
    strokes: Vec<Stroke>,

    /// Write the final frame as PNG
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the final grid as ASCII art
    #[arg(long)]
    ascii: Option<PathBuf>,

    /// Log a stats line every N ticks (0 = never)
    #[arg(long)]
    stats_every: Option<u32>,
}

impl Args {
    fn apply(self, config: &mut RunnerConfig) {
        if let Some(ticks) = self.ticks {
            config.run.ticks = ticks;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(density) = self.density {
            config.simulation.generator.density = density;
        }
        if self.no_generate {
            config.run.generate = false;
        }
        if let Some(every) = self.stats_every {
            config.run.stats_every = every;
        }
        if self.png.is_some() {
            config.run.png = self.png;
        }
        if self.ascii.is_some() {
            config.run.ascii = self.ascii;
        }
        config.strokes.extend(self.strokes);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = RunnerConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    args.apply(&mut config);
    config
        .simulation
        .validate()
        .context("Invalid command line options")?;

    log::info!("Starting tilesand");
    let summary = Runner::new(config)?.run()?;
    log::info!("Run complete (seed {})", summary.seed);
    Ok(())
}
