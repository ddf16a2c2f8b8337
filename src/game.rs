//! Game rules layered over the move history.

use crate::{
    board::{self, Board, CELL_COUNT, Mark},
    history::{GameHistory, HistoryError},
};

/// Mark to play when `cursor` moves have been made.
pub fn next_player(cursor: usize) -> Mark {
    if cursor % 2 == 0 { Mark::A } else { Mark::B }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Occupied,
    Finished,
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { mark: Mark, cell: usize },
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry of the "jump to move" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub index: usize,
    pub label: String,
    /// 1-based (row, column) filled by this move; `None` for the start.
    pub location: Option<(usize, usize)>,
    pub is_current: bool,
}

/// Display symbols for the two marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSymbols {
    pub a: String,
    pub b: String,
}

impl MarkSymbols {
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::A => &self.a,
            Mark::B => &self.b,
        }
    }
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self {
            a: "X".to_string(),
            b: "O".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    history: GameHistory,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays the next mark at `cell` on the displayed board.
    ///
    /// Illegal moves are no-ops reported through `MoveOutcome::Rejected`.
    pub fn play(&mut self, cell: usize) -> MoveOutcome {
        if cell >= CELL_COUNT {
            return MoveOutcome::Rejected(RejectReason::OutOfBounds);
        }
        if self.status().is_finished() {
            return MoveOutcome::Rejected(RejectReason::Finished);
        }

        let current = self.history.current_board();
        if current.is_occupied(cell) {
            return MoveOutcome::Rejected(RejectReason::Occupied);
        }

        let mark = next_player(self.history.cursor());
        let next = current.with_mark(cell, mark);
        self.history.append_move(next);

        MoveOutcome::Placed { mark, cell }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    pub fn status(&self) -> GameStatus {
        let board = self.history.current_board();
        if let (Some(line), Some(mark)) = (board::winning_line(board), board::winner(board)) {
            return GameStatus::Won { mark, line };
        }
        if board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress {
            next: next_player(self.history.cursor()),
        }
    }

    pub fn status_text(&self, symbols: &MarkSymbols) -> String {
        match self.status() {
            GameStatus::Won { mark, .. } => format!("Winner: {}", symbols.symbol(mark)),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress { next } => format!("Next player: {}", symbols.symbol(next)),
        }
    }

    pub fn moves(&self, order: SortOrder) -> Vec<MoveDescriptor> {
        let snapshots = self.history.snapshots();
        let mut moves: Vec<MoveDescriptor> = snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                let label = if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{index}")
                };
                let location = index
                    .checked_sub(1)
                    .and_then(|prev| snapshots[prev].changed_cell(snapshot))
                    .map(board::location);

                MoveDescriptor {
                    index,
                    label,
                    location,
                    is_current: index == self.history.cursor(),
                }
            })
            .collect();

        if order == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }

    pub fn restart(&mut self) {
        self.history.reset();
    }

    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }
}
