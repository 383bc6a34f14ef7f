//! The B3/S23 transition rule.

use crate::Grid;

/// Next state of a cell given its current state and live neighbor count.
///
/// A cell is alive in the next generation if it has exactly three live
/// neighbors, or if it is alive now and has exactly two.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Computes the generation that follows `current`.
///
/// Every cell is read from `current` and written to a fresh grid of the same
/// dimensions, so the whole generation advances at once.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::new(current.rows(), current.cols());
    for r in 0..current.rows() {
        for c in 0..current.cols() {
            if next_state(current.is_alive(r, c), current.live_neighbors(r, c)) {
                next.set(r, c, true);
            }
        }
    }
    next
}
