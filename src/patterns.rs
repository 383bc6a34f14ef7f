//! Built-in seed patterns.

use clap::ValueEnum;
use tracing::instrument;

/// A named starting pattern, placed at the top-left of the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, strum::EnumIter, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Pattern {
    /// Glider travelling down and to the right.
    Glider,
    /// Period-2 oscillator.
    Blinker,
    /// Period-2 oscillator.
    Toad,
    /// Period-2 oscillator made of two blocks.
    Beacon,
    /// 2×2 still life.
    Block,
}

impl Pattern {
    /// Live cells as `(row, col)` offsets from the top-left corner.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Glider => &[(0, 2), (1, 3), (2, 1), (2, 2), (2, 3)],
            Pattern::Blinker => &[(1, 0), (1, 1), (1, 2)],
            Pattern::Toad => &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
            Pattern::Beacon => &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
            Pattern::Block => &[(1, 1), (1, 2), (2, 1), (2, 2)],
        }
    }

    /// Builds the smallest boolean matrix holding the pattern.
    #[instrument]
    pub fn matrix(self) -> Vec<Vec<bool>> {
        let cells = self.cells();
        let rows = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        let mut matrix = vec![vec![false; cols]; rows];
        for &(r, c) in cells {
            matrix[r][c] = true;
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::LifeEngine;
    use strum::IntoEnumIterator;

    #[test]
    fn test_glider_matches_original_demo() {
        let expected = vec![
            vec![false, false, true, false],
            vec![false, false, false, true],
            vec![false, true, true, true],
        ];
        assert_eq!(Pattern::Glider.matrix(), expected);
    }

    #[test]
    fn test_every_pattern_has_live_cells() {
        for pattern in Pattern::iter() {
            let population: usize = pattern
                .matrix()
                .iter()
                .map(|row| row.iter().filter(|&&alive| alive).count())
                .sum();
            assert_eq!(population, pattern.cells().len(), "{pattern}");
        }
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [Pattern::Blinker, Pattern::Toad, Pattern::Beacon] {
            let mut engine = LifeEngine::new(6, 6);
            engine.start(&pattern.matrix());
            let initial = engine.grid().clone();
            engine.next_step();
            assert_ne!(engine.grid(), &initial, "{pattern} should change");
            engine.next_step();
            assert_eq!(engine.grid(), &initial, "{pattern} should return");
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Pattern::Beacon.to_string(), "beacon");
    }
}
