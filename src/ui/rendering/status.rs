use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::GameStatus, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_game_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let history = self.game.history();
        let mut status_text = self.game.status_text(&self.symbols);
        if !history.is_latest() {
            status_text.push_str(&format!(
                " | viewing move {} of {}",
                history.cursor(),
                history.len() - 1
            ));
        }

        let color = match self.game.status() {
            GameStatus::Won { .. } => Color::Green,
            GameStatus::Draw => Color::Yellow,
            GameStatus::InProgress { .. } => Color::White,
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
