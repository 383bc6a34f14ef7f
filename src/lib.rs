//! conway_life - Game of Life rendered to a text stream
//!
//! This library wraps the [`life_engine`] crate with the pieces a terminal
//! program needs.
//!
//! # Architecture
//!
//! - **Loader**: parses a delimiter-separated text grid into a boolean matrix
//! - **Patterns**: built-in seeds for quick demos
//! - **Renderer**: writes one character per cell, one row per line
//! - **Simulation**: steps the engine and renders each generation
//! - **Settings**: optional TOML file for glyphs and frame delay
//!
//! # Example
//!
//! ```
//! use conway_life::{LifeEngine, Pattern, Renderer, Simulation};
//! use std::time::Duration;
//!
//! let mut engine = LifeEngine::new(8, 8);
//! engine.start(&Pattern::Glider.matrix());
//!
//! let mut simulation = Simulation::new(engine, Renderer::default(), 4, Duration::ZERO);
//! let mut out = Vec::new();
//! simulation.run(&mut out).unwrap();
//! assert_eq!(simulation.engine().generation(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod cli;
mod loader;
mod patterns;
mod render;
mod settings;
mod simulation;

// Crate-level exports - Entry points
pub use app::{load_seed, load_settings, run};
pub use cli::{Cli, MAX_DIMENSION};

// Crate-level exports - Collaborators
pub use loader::{InitialState, LoadError, LoadErrorKind, LoaderOptions};
pub use patterns::Pattern;
pub use render::Renderer;
pub use settings::{ConfigError, Settings};
pub use simulation::Simulation;

// Crate-level exports - Engine types
pub use life_engine::{DimensionError, Grid, LifeEngine, alive_matrix};
