//! Pure Game of Life engine.
//!
//! The engine owns a fixed-size grid, seeds it from a boolean matrix, and
//! advances it one generation at a time with the standard B3/S23 rule.
//! Cells outside the grid count as dead; the topology does not wrap.
//!
//! # Example
//!
//! ```
//! use life_engine::LifeEngine;
//!
//! let mut engine = LifeEngine::new(4, 4);
//! engine.start(&[[false, true, false], [false, true, false], [false, true, false]]);
//! engine.next_step();
//! assert_eq!(engine.grid().row(1), Some(&[true, true, true, false][..]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod grid;
pub mod invariants;
pub mod rules;

pub use engine::{DEFAULT_SIZE, DimensionError, LifeEngine, alive_matrix};
pub use grid::Grid;
pub use invariants::{ConfiguredDimensions, Invariant, InvariantViolation, RectangularGrid};
