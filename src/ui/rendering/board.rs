//! 3x3 board rendering with the winning line highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::GameStatus, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let board = self.game.current_board();
        let winning = match self.game.status() {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        };

        let mut lines = Vec::new();
        for row in 0..3 {
            let mut spans = Vec::new();
            for col in 0..3 {
                let cell = row * 3 + col;
                let span = match board.get(cell) {
                    Some(mark) => {
                        let style = if winning.is_some_and(|l| l.contains(&cell)) {
                            Style::default()
                                .bg(Color::Green)
                                .fg(Color::Black)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().add_modifier(Modifier::BOLD)
                        };
                        Span::styled(format!(" {} ", self.symbols.symbol(mark)), style)
                    }
                    // Hint the key that plays this cell.
                    None => Span::styled(
                        format!(" {} ", cell + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                };
                spans.push(span);
                if col < 2 {
                    spans.push(Span::raw("│"));
                }
            }
            lines.push(Line::from(spans));
            if row < 2 {
                lines.push(Line::from("───┼───┼───"));
            }
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Board | 1-9: play"),
            ),
            area,
        );
    }
}
