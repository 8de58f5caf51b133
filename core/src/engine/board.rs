use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 3x3 grid stored row-major. `Copy`, so search code works on snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Copy of the board with `mark` placed at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}
