//! Command-line interface for conway_life.

use crate::Pattern;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 4096;

/// Parses a row or column count in `1..=MAX_DIMENSION`.
fn parse_dimension(value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if (1..=MAX_DIMENSION).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_DIMENSION}"))
    }
}

/// Conway's Game of Life on a bounded grid
#[derive(Parser, Debug, Clone)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life on a bounded grid", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("seed").required(true).args(["file", "demo"])))]
pub struct Cli {
    /// Number of grid rows
    #[arg(short, long, default_value_t = 20, value_parser = parse_dimension)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = 40, value_parser = parse_dimension)]
    pub cols: usize,

    /// Number of generations to print, the initial one included
    #[arg(short, long, default_value_t = 20)]
    pub steps: usize,

    /// Token that marks a live cell in the input file
    #[arg(short, long, default_value = "*")]
    pub alive: String,

    /// Field delimiter in the input file (empty for one cell per character)
    #[arg(short, long, default_value = " ")]
    pub delimiter: String,

    /// Initial-state file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Built-in pattern to use instead of a file
    #[arg(long, value_enum)]
    pub demo: Option<Pattern>,

    /// Delay between frames in milliseconds (overrides the settings file)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dimension_bounds() {
        assert_eq!(parse_dimension("1"), Ok(1));
        assert_eq!(parse_dimension("4096"), Ok(MAX_DIMENSION));
        assert!(parse_dimension("0").is_err());
        assert!(parse_dimension("4097").is_err());
        assert!(parse_dimension("-3").is_err());
    }
}
