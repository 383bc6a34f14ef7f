//! Text rendering of grids.

use crate::Settings;
use life_engine::Grid;
use std::io::{self, Write};

/// Writes grids one character per cell, one row per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Renderer {
    alive: char,
    dead: char,
}

impl Renderer {
    /// Builds a renderer from the glyphs in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(*settings.alive_glyph(), *settings.dead_glyph())
    }

    /// Writes the grid rows, each terminated by a newline.
    pub fn write_grid<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()> {
        let mut line = String::with_capacity(grid.cols() + 1);
        for row in grid.rows_iter() {
            line.clear();
            line.extend(row.iter().map(|&alive| if alive { self.alive } else { self.dead }));
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Writes one frame: a blank line, the grid, and a blank line.
    pub fn render_frame<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        self.write_grid(grid, out)?;
        writeln!(out)?;
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new('*', '-')
    }
}
