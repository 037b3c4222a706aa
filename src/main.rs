/*
 * Gopher Flock Viewer
 *
 * Opens a window with a flock of gophers, each steering toward its own goal
 * with a PID controller. Goals drift between the window center and the
 * flock's center of gravity.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gophers::app::{self, Launch};
use gophers::config::{DEFAULT_AGENT_COUNT, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};
use gophers::{Flock, FlockConfig, DEFAULT_SPRITE_PATH};

#[derive(Parser, Debug)]
#[command(author, version, about = "A flock of PID-steered gophers", long_about = None)]
struct Args {
    /// Number of gophers in the flock
    #[arg(short = 'n', long, default_value_t = DEFAULT_AGENT_COUNT)]
    agents: usize,

    /// World (and window) width
    #[arg(long, default_value_t = DEFAULT_WORLD_WIDTH)]
    width: f64,

    /// World (and window) height
    #[arg(long, default_value_t = DEFAULT_WORLD_HEIGHT)]
    height: f64,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Update gophers on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Sprite image drawn for each gopher
    #[arg(long, default_value = DEFAULT_SPRITE_PATH)]
    sprite: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = FlockConfig {
        seed: args.seed,
        parallel: args.parallel,
        ..FlockConfig::new(args.agents, args.width, args.height)
    };
    let flock = Flock::with_config(config).context("Invalid flock configuration")?;

    log::info!("Gopher viewer starting...");
    log::info!(
        "{} gophers in a {}x{} world, seed {:?}",
        flock.len(),
        args.width,
        args.height,
        flock.seed()
    );

    app::run(Launch {
        flock,
        sprite_path: args.sprite,
    })
    .context("Viewer error")?;

    Ok(())
}
