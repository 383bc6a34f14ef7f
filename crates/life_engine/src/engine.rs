//! Game of Life engine owning the current generation.

use crate::invariants;
use crate::rules::next_generation;
use crate::Grid;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Default number of rows and columns.
pub const DEFAULT_SIZE: usize = 25;

/// Engine for Conway's Game of Life on a bounded grid.
///
/// The engine is created with fixed dimensions and holds an empty grid until
/// [`start`](Self::start) seeds it. Each call to [`next_step`](Self::next_step)
/// replaces the grid with the next generation.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    rows: usize,
    cols: usize,
    grid: Grid,
    generation: u64,
    started: bool,
}

/// Grid dimensions whose cell count does not fit in `usize`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Grid of {rows} x {cols} cells is too large")]
pub struct DimensionError {
    /// Requested rows.
    pub rows: usize,
    /// Requested columns.
    pub cols: usize,
}

impl LifeEngine {
    /// Creates an engine for a `rows × cols` grid. No cells are allocated yet.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; see [`LifeEngine::try_new`].
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(engine) => engine,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates an engine, rejecting dimensions whose cell count overflows.
    #[instrument]
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        if rows.checked_mul(cols).is_none() {
            return Err(DimensionError { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            grid: Grid::default(),
            generation: 0,
            started: false,
        })
    }

    /// Configured number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Configured number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of steps taken since the last start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true once the grid has been allocated by `start`.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Seeds the grid from a boolean matrix of any size.
    ///
    /// Rows and columns past the engine's dimensions are ignored; cells the
    /// matrix does not cover are dead.
    #[instrument(skip(self, initial), fields(rows = self.rows, cols = self.cols, initial_rows = initial.len()))]
    pub fn start<R: AsRef<[bool]>>(&mut self, initial: &[R]) {
        let mut grid = Grid::new(self.rows, self.cols);
        for (r, row) in initial.iter().take(self.rows).enumerate() {
            for (c, &alive) in row.as_ref().iter().take(self.cols).enumerate() {
                grid.set(r, c, alive);
            }
        }
        self.grid = grid;
        self.generation = 0;
        self.started = true;
        debug!(population = self.grid.population(), "Engine started");
        invariants::assert_engine(self);
    }

    /// Seeds the grid from a matrix of arbitrary values.
    ///
    /// A cell is alive when its value equals `alive`.
    #[instrument(skip(self, initial, alive))]
    pub fn start_with<T, R>(&mut self, initial: &[R], alive: &T)
    where
        T: PartialEq,
        R: AsRef<[T]>,
    {
        self.start(&alive_matrix(initial, alive));
    }

    /// Advances the grid by one generation.
    ///
    /// Does nothing before `start`, since the grid is still empty.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn next_step(&mut self) {
        if !self.started {
            return;
        }
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Generation computed"
        );
        invariants::assert_engine(self);
    }

    /// Kills every cell, keeping the dimensions.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        self.grid.clear();
        invariants::assert_engine(self);
    }

    /// Stops the engine and seeds it again.
    #[instrument(skip(self, initial))]
    pub fn restart<R: AsRef<[bool]>>(&mut self, initial: &[R]) {
        self.stop();
        self.start(initial);
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Converts a matrix of values into a boolean matrix.
///
/// A cell is alive when it equals `alive`. Row lengths are preserved.
pub fn alive_matrix<T, R>(matrix: &[R], alive: &T) -> Vec<Vec<bool>>
where
    T: PartialEq,
    R: AsRef<[T]>,
{
    matrix
        .iter()
        .map(|row| row.as_ref().iter().map(|value| value == alive).collect())
        .collect()
}
