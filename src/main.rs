//! Terminal Game of Life runner (default binary).
//!
//! Each keypress advances one generation; `Q` quits.
//!
//! Environment:
//! - `LIFE_SEED`: fixed `u32` seed for a reproducible board
//! - `LIFE_LOG_PATH`: write `tracing` logs to this file (filtered by `RUST_LOG`)

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_life::engine::{Controller, LifeConfig, SeedSource, Surface};
use tui_life::term::TerminalSurface;

fn main() -> Result<()> {
    let config = LifeConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    if let SeedSource::Rejected(raw) = &config.seed_source {
        warn!(value = %raw, seed = config.seed, "LIFE_SEED is not a u32, using clock seed");
    }

    let surface = TerminalSurface::enter()?;
    let mut controller = Controller::new(surface, config.seed);
    let result = controller.run();

    // Always try to restore terminal state.
    let _ = controller.into_surface().release();

    let generation = result?;
    info!(generation, "simulation finished");
    Ok(())
}

/// Logs go to a file: the terminal itself is in raw mode on the alternate screen.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tui_life=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
