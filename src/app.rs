//! Wires the command line to the loader, engine and simulation.

use crate::{Cli, InitialState, LoaderOptions, Renderer, Settings, Simulation};
use anyhow::{Context, Result, anyhow};
use life_engine::LifeEngine;
use std::io::Write;
use tracing::{info, instrument};

/// Runs the simulation described by `cli`, writing frames to `out`.
///
/// Settings and the initial state are loaded before the engine is built,
/// so any input error aborts without printing a frame.
#[instrument(skip_all, fields(rows = cli.rows, cols = cli.cols, steps = cli.steps))]
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let settings = load_settings(cli)?;
    let seed = load_seed(cli)?;

    let mut engine = LifeEngine::try_new(cli.rows, cli.cols)?;
    engine.start(&seed);
    info!(population = engine.grid().population(), "Engine seeded");

    let mut simulation = Simulation::new(
        engine,
        Renderer::from_settings(&settings),
        cli.steps,
        settings.delay(),
    );
    simulation.run(out).context("Failed to write frame")?;
    Ok(())
}

/// Settings from `--config`, with `--delay-ms` applied on top.
#[instrument(skip(cli))]
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    Ok(match cli.delay_ms {
        Some(delay_ms) => settings.with_delay_ms(delay_ms),
        None => settings,
    })
}

/// The initial boolean matrix from `--demo` or `--file`.
#[instrument(skip(cli))]
pub fn load_seed(cli: &Cli) -> Result<Vec<Vec<bool>>> {
    if let Some(pattern) = cli.demo {
        info!(%pattern, "Using built-in pattern");
        return Ok(pattern.matrix());
    }

    let path = cli
        .file
        .as_ref()
        .ok_or_else(|| anyhow!("An initial-state file or a demo pattern is required"))?;
    let options = LoaderOptions::new(cli.alive.clone(), cli.delimiter.clone());
    let state = InitialState::from_path(path, &options)?;
    Ok(state.cells().to_vec())
}
