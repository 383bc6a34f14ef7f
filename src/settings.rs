//! Display settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Rendering and pacing preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct Settings {
    /// Glyph printed for a live cell.
    #[serde(default = "default_alive_glyph")]
    alive_glyph: char,

    /// Glyph printed for a dead cell.
    #[serde(default = "default_dead_glyph")]
    dead_glyph: char,

    /// Pause between frames, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,
}

fn default_alive_glyph() -> char {
    '*'
}

fn default_dead_glyph() -> char {
    '-'
}

fn default_delay_ms() -> u64 {
    300
}

impl Settings {
    /// Loads settings from a TOML file. Missing fields take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(delay_ms = settings.delay_ms, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Returns a copy with the frame delay replaced.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Frame delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alive_glyph: default_alive_glyph(),
            dead_glyph: default_dead_glyph(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
