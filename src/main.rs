//! conway_life - command-line entry point
//!
//! Prints successive generations of a Game of Life seed to stdout.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use conway_life::Cli;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    info!(
        rows = cli.rows,
        cols = cli.cols,
        steps = cli.steps,
        file = ?cli.file,
        demo = ?cli.demo,
        "Starting conway_life"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    conway_life::run(&cli, &mut out)
}

/// Logs go to stderr so stdout carries only frames.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
