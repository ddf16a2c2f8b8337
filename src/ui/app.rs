use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    config::Config,
    game::{Game, MarkSymbols, SortOrder},
    products::{Product, ProductFilter},
    todo::TodoList,
};

use super::types::{LogBuffer, Screen, TodoInputMode};

/// Main application state container.
pub struct App {
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) game: Game,
    pub(in crate::ui) symbols: MarkSymbols,
    pub(in crate::ui) sort_order: SortOrder,
    /// Row selected in the displayed move list (not a move index).
    pub(in crate::ui) selected_move: usize,
    pub(in crate::ui) catalog: Vec<Product>,
    pub(in crate::ui) filter: ProductFilter,
    pub(in crate::ui) todos: TodoList,
    pub(in crate::ui) selected_task: usize,
    pub(in crate::ui) todo_mode: TodoInputMode,
    pub(in crate::ui) input: String,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(config: &Config, catalog: Vec<Product>, logs: LogBuffer) -> Self {
        Self {
            screen: config.ui.start_screen,
            game: Game::new(),
            symbols: config.game.symbols(),
            sort_order: config.game.sort_order(),
            selected_move: 0,
            catalog,
            filter: config.products.filter(),
            todos: config.todos.todo_list(),
            selected_task: 0,
            todo_mode: TodoInputMode::Adding,
            input: String::new(),
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started on {} screen", self.screen.title());
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
