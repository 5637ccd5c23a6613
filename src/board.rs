use crate::cell::Cell;
use crate::utils::{neighbors, Pattern};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The automaton: a fixed-size toroidal grid of cells.
///
/// Holds exactly `width * height` cells in row-major order, one per
/// coordinate, created at construction and never resized.
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    // Next-generation states staged during `step`.
    scratch: Vec<bool>,
}

impl Board {
    /// Creates a board with all cells dead.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for column in 0..width {
                cells.push(Cell::new(row, column));
            }
        }
        Self {
            width,
            height,
            cells,
            scratch: vec![false; width * height],
        }
    }

    /// Creates a board seeded with the given live cells.
    /// Out-of-range coordinates are skipped.
    pub fn with_live_cells(width: usize, height: usize, live: &[(usize, usize)]) -> Self {
        let mut board = Self::new(width, height);
        for &(row, column) in live {
            if row < height && column < width {
                board.set(row, column, true);
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    /// Status of the cell at an in-range coordinate.
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.cells[self.index(row, column)].is_alive()
    }

    pub fn set(&mut self, row: usize, column: usize, alive: bool) {
        let i = self.index(row, column);
        self.cells[i].set_alive(alive);
    }

    /// Flips the cell under a user interaction. Out-of-range coordinates
    /// (negative included) are ignored: pointer math in the view can land
    /// outside the grid and that is the caller's problem, not a crash.
    pub fn toggle_cell(&mut self, row: i32, column: i32) {
        if row < 0 || column < 0 {
            return;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.height || column >= self.width {
            return;
        }
        let i = self.index(row, column);
        self.cells[i].toggle();
    }

    fn live_neighbors(&self, row: usize, column: usize) -> usize {
        neighbors(row, column, self.width, self.height)
            .iter()
            .filter(|&&(r, c)| self.get(r, c))
            .count()
    }

    /// Advances the board one generation.
    ///
    /// Two phases: every next state is computed from the current generation
    /// into the scratch buffer before any cell is mutated, so neighbor
    /// counts never observe a half-updated grid. Then all flips are
    /// committed together.
    pub fn step(&mut self) {
        for row in 0..self.height {
            for column in 0..self.width {
                let n = self.live_neighbors(row, column);
                let next = if self.get(row, column) {
                    n == 2 || n == 3
                } else {
                    n == 3
                };
                self.scratch[row * self.width + column] = next;
            }
        }
        for (cell, &next) in self.cells.iter_mut().zip(&self.scratch) {
            cell.set_alive(next);
        }
    }

    /// Enumerates every cell in row-major order, for the view to draw.
    pub fn for_each_cell(&self, mut f: impl FnMut(usize, usize, bool)) {
        for cell in &self.cells {
            f(cell.row(), cell.column(), cell.is_alive());
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_alive(false);
        }
    }

    /// Refills the board at the given fill rate. A seed makes the fill
    /// reproducible; `None` seeds from entropy.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        for cell in &mut self.cells {
            cell.set_alive(rng.gen_bool(fill_rate));
        }
    }

    /// Clears the board and places a named pattern.
    /// Pattern cells outside the grid are skipped.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.clear();
        for &(row, column) in pattern.cells {
            if row < self.height && column < self.width {
                self.set(row, column, true);
            }
        }
    }
}
