mod board;
mod input_field;
mod logs;
mod moves;
mod products;
mod status;
mod tabs;
mod todos;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Screen tabs
                Constraint::Min(10),   // Screen content
                Constraint::Length(8), // Logs
            ])
            .split(f.area());

        self.draw_tabs(f, layout[0]);

        match self.screen {
            Screen::Game => self.draw_game_screen(f, layout[1]),
            Screen::Products => self.draw_products(f, layout[1]),
            Screen::Todos => self.draw_todos_screen(f, layout[1]),
        }

        self.draw_logs(f, layout[2]);
    }

    fn draw_game_screen(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(7)])
            .split(columns[0]);

        self.draw_game_status(f, left[0]);
        self.draw_board(f, left[1]);
        self.draw_moves(f, columns[1]);
    }

    fn draw_todos_screen(&self, f: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        self.draw_todos(f, layout[0]);
        self.draw_input(f, layout[1]);
    }
}
