//! Linear move history with a cursor for time travel.

use thiserror::Error;

use crate::board::Board;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history index {index} out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered board snapshots plus the index of the one currently displayed.
///
/// Index 0 is always the empty board. Appending after jumping backward
/// discards every snapshot past the cursor.
#[derive(Debug, Clone)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::empty()],
            cursor: 0,
        }
    }

    /// Replaces everything after the cursor with `board` and moves onto it.
    ///
    /// `board` is assumed to be a legal successor of the current board;
    /// the game rules check that before calling.
    pub fn append_move(&mut self, board: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    pub fn is_latest(&self) -> bool {
        self.cursor == self.snapshots.len() - 1
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the empty starting board is always present.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
