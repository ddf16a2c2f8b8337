//! Tic-tac-toe board snapshots and win detection.

pub const CELL_COUNT: usize = 9;

/// The 8 lines checked for a winner: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    A,
    B,
}

/// A 9-cell snapshot. Boards are values: placing a mark yields a new board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn is_occupied(&self, cell: usize) -> bool {
        self.get(cell).is_some()
    }

    /// Returns a copy of this board with `mark` placed at `cell`.
    ///
    /// Callers are expected to check bounds and occupancy first; an
    /// out-of-range cell leaves the copy unchanged.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Board {
        let mut next = *self;
        if let Some(slot) = next.cells.get_mut(cell) {
            *slot = Some(mark);
        }
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Index of the single cell that is empty here but filled in `next`.
    pub fn changed_cell(&self, next: &Board) -> Option<usize> {
        (0..CELL_COUNT).find(|&i| self.cells[i].is_none() && next.cells[i].is_some())
    }
}

/// First line (rows, columns, diagonals) holding three equal marks.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.iter().copied().find(|&[a, b, c]| {
        let first = board.get(a);
        first.is_some() && first == board.get(b) && first == board.get(c)
    })
}

pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

/// 1-based (row, column) of a cell index.
pub fn location(cell: usize) -> (usize, usize) {
    (cell / 3 + 1, cell % 3 + 1)
}
