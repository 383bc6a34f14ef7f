//! Structural invariants of the grid and engine.
//!
//! Invariants are checked with `debug_assert!` after every engine mutation.

use crate::{Grid, LifeEngine};
use derive_more::{Display, Error};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Checks a single invariant, returning the violation if it fails.
pub fn check<I: Invariant<S>, S>(state: &S) -> Result<(), InvariantViolation> {
    if I::holds(state) {
        Ok(())
    } else {
        Err(InvariantViolation::new(I::description()))
    }
}

/// Invariant: the grid stores exactly `rows * cols` cells.
pub struct RectangularGrid;

impl Invariant<Grid> for RectangularGrid {
    fn holds(grid: &Grid) -> bool {
        grid.cells().len() == grid.rows() * grid.cols()
            && grid.rows_iter().all(|row| row.len() == grid.cols())
    }

    fn description() -> &'static str {
        "Grid holds exactly rows * cols cells"
    }
}

/// Invariant: a started engine's grid has the configured dimensions.
pub struct ConfiguredDimensions;

impl Invariant<LifeEngine> for ConfiguredDimensions {
    fn holds(engine: &LifeEngine) -> bool {
        if !engine.is_started() {
            return engine.grid().is_empty();
        }
        let grid = engine.grid();
        grid.rows() == engine.rows() && grid.cols() == engine.cols()
    }

    fn description() -> &'static str {
        "Started engine grid matches the configured rows and columns"
    }
}

/// Asserts every engine invariant in debug builds.
pub(crate) fn assert_engine(engine: &LifeEngine) {
    debug_assert!(
        RectangularGrid::holds(engine.grid()),
        "{}",
        RectangularGrid::description()
    );
    debug_assert!(
        ConfiguredDimensions::holds(engine),
        "{}",
        ConfiguredDimensions::description()
    );
}
