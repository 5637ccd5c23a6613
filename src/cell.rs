/// A single cell of the automaton.
///
/// Identity is the (row, column) position, fixed for the cell's lifetime;
/// only the alive flag ever changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
}

impl Cell {
    /// Creates a dead cell at the given position.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            alive: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }
}
