#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use toroidal_life::{App, Config, Engine};

/// Conway's Game of Life on a torus.
#[derive(Parser)]
#[command(name = "toroidal_life", about = "Conway's Game of Life on a torus")]
struct Args {
    /// Side length of the field in cells.
    #[arg(long, default_value_t = Config::GRID_DIMS)]
    size: usize,

    /// Probability of a cell being alive after pressing R.
    #[arg(long, default_value_t = Config::FILL_RATE)]
    fill_rate: f64,

    /// Seed for randomization (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound on frames (and generations) per second.
    #[arg(long, default_value_t = Config::MAX_FPS)]
    max_fps: f64,

    /// RLE pattern placed in the middle of the field at startup.
    #[arg(long)]
    pattern: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            grid_dims: args.size,
            fill_rate: args.fill_rate,
            seed: args.seed,
            max_fps: args.max_fps,
            pattern: args.pattern,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from(Args::parse());
    let engine = Engine::from_config(&config).context("Failed to set up the field")?;
    log::info!(
        "Starting with a {0}x{0} field, {1} cells alive",
        engine.size(),
        engine.population()
    );

    let max_fps = config.max_fps;
    eframe::run_native(
        App::title(),
        App::native_options(),
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, engine, max_fps)))),
    )
    .map_err(|e| anyhow!("Failed to run the window: {e}"))
}
