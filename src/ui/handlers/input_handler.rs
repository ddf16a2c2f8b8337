//! Keyboard routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Screen};
use super::{GameHandler, ProductsHandler, TodoHandler};

/// Helper struct for dispatching key presses to the active screen.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }
            (KeyCode::Tab, _) => {
                let next = self.app.screen.next();
                self.switch_screen(next);
            }
            (KeyCode::Char('g' | 'G'), KeyModifiers::CONTROL) => self.switch_screen(Screen::Game),
            (KeyCode::Char('p' | 'P'), KeyModifiers::CONTROL) => {
                self.switch_screen(Screen::Products)
            }
            (KeyCode::Char('t' | 'T'), KeyModifiers::CONTROL) => self.switch_screen(Screen::Todos),
            _ => match self.app.screen {
                Screen::Game => self.handle_game_key(key),
                Screen::Products => self.handle_products_key(key),
                Screen::Todos => self.handle_todos_key(key),
            },
        }
        false
    }

    fn switch_screen(&mut self, screen: Screen) {
        if self.app.screen != screen {
            self.app.screen = screen;
            self.app.log(format!("Switched to {}", screen.title()));
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('o' | 'O'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).toggle_order()
            }
            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                GameHandler::new(self.app).restart()
            }
            (KeyCode::Char(c @ '1'..='9'), _) => {
                // Keys 1-9 map to cells 0-8, laid out like a phone keypad.
                let cell = c as usize - '1' as usize;
                GameHandler::new(self.app).play_cell(cell);
            }
            (KeyCode::Up, _) => GameHandler::new(self.app).select_prev(),
            (KeyCode::Down, _) => GameHandler::new(self.app).select_next(),
            (KeyCode::Enter, _) => GameHandler::new(self.app).jump_selected(),
            _ => {}
        }
    }

    fn handle_products_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('s' | 'S'), KeyModifiers::CONTROL) => {
                ProductsHandler::new(self.app).toggle_in_stock()
            }
            (KeyCode::Esc, _) => ProductsHandler::new(self.app).clear(),
            (KeyCode::Backspace, _) => ProductsHandler::new(self.app).pop_char(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                ProductsHandler::new(self.app).push_char(c)
            }
            _ => {}
        }
    }

    fn handle_todos_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('d' | 'D'), KeyModifiers::CONTROL) => {
                TodoHandler::new(self.app).toggle_selected()
            }
            (KeyCode::Char('x' | 'X'), KeyModifiers::CONTROL) => {
                TodoHandler::new(self.app).delete_selected()
            }
            (KeyCode::Char('e' | 'E'), KeyModifiers::CONTROL) => {
                TodoHandler::new(self.app).begin_edit()
            }
            (KeyCode::Esc, _) => TodoHandler::new(self.app).cancel_edit(),
            (KeyCode::Up, _) => TodoHandler::new(self.app).select_prev(),
            (KeyCode::Down, _) => TodoHandler::new(self.app).select_next(),
            (KeyCode::Enter, _) => TodoHandler::new(self.app).submit_input(),
            (KeyCode::Backspace, _) => {
                self.app.input.pop();
            }
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => self.app.input.push(c),
            _ => {}
        }
    }
}
