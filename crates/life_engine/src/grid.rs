//! Bounded, fixed-size grid of live/dead cells.

/// Offsets of the eight cells surrounding a position.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `rows × cols` grid of cells in row-major order.
///
/// Dimensions are fixed at construction. A cell is either alive (`true`)
/// or dead (`false`); positions outside the grid read as dead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Cells in row-major order, `rows * cols` long.
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use [`Grid::try_new`] to
    /// handle that case.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(grid) => grid,
            None => panic!("Grid of {rows} x {cols} cells overflows usize"),
        }
    }

    /// Creates a grid with every cell dead, or `None` if `rows * cols`
    /// overflows `usize`.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        Some(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the state of the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Returns true if the cell at `(row, col)` exists and is alive.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Sets the cell at `(row, col)`. Positions outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = alive;
        }
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            &self.cells[start..start + self.cols]
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Sets every cell dead without changing the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Counts live cells among the eight neighbors of `(row, col)`.
    ///
    /// Neighbors outside the grid count as dead; there is no wrap-around.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                    (Some(r), Some(c)) => self.is_alive(r, c),
                    _ => false,
                }
            })
            .count() as u8
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                write!(f, "{}", if alive { '*' } else { '-' })?;
            }
        }
        Ok(())
    }
}
