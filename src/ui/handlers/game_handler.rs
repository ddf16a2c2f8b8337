//! Tic-tac-toe screen state management.

use crate::{
    board::location,
    game::{GameStatus, MoveOutcome},
};

use super::super::app::App;

/// Helper struct for managing game moves and history navigation.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Cell click: plays the next mark on the displayed board.
    pub fn play_cell(&mut self, cell: usize) {
        match self.app.game.play(cell) {
            MoveOutcome::Placed { mark, cell } => {
                let (row, col) = location(cell);
                self.app.log(format!(
                    "{} played ({}, {})",
                    self.app.symbols.symbol(mark),
                    row,
                    col
                ));
                self.sync_selection();
                self.report_finish();
            }
            MoveOutcome::Rejected(reason) => {
                tracing::debug!(cell, ?reason, "move ignored");
            }
        }
    }

    /// History entry click: jumps to the move at the selected row.
    pub fn jump_selected(&mut self) {
        let moves = self.app.game.moves(self.app.sort_order);
        if let Some(target) = moves.get(self.app.selected_move) {
            self.jump_to(target.index);
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        match self.app.game.jump_to(index) {
            Ok(()) => {
                if index == 0 {
                    self.app.log("Back to game start");
                } else {
                    self.app.log(format!("Jumped to move #{index}"));
                }
                self.sync_selection();
            }
            Err(e) => {
                tracing::error!("history navigation contract violated: {e}");
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.app.selected_move = self.app.selected_move.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.app.game.history().len() - 1;
        if self.app.selected_move < last {
            self.app.selected_move += 1;
        }
    }

    pub fn toggle_order(&mut self) {
        self.app.sort_order = self.app.sort_order.toggled();
        let last = self.app.game.history().len() - 1;
        self.app.selected_move = last - self.app.selected_move.min(last);
        self.app.log(format!("Move list order: {:?}", self.app.sort_order));
    }

    pub fn restart(&mut self) {
        self.app.game.restart();
        self.app.selected_move = 0;
        self.app.log("New game");
    }

    /// Points the selection at the row of the displayed move.
    fn sync_selection(&mut self) {
        let moves = self.app.game.moves(self.app.sort_order);
        if let Some(row) = moves.iter().position(|m| m.is_current) {
            self.app.selected_move = row;
        }
    }

    fn report_finish(&mut self) {
        match self.app.game.status() {
            GameStatus::Won { mark, .. } => {
                self.app
                    .log(format!("Winner: {}", self.app.symbols.symbol(mark)));
            }
            GameStatus::Draw => self.app.log("Draw"),
            GameStatus::InProgress { .. } => {}
        }
    }
}
