//! Log panel rendering.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let logs = self.logs.lines();

        // Leave room for the borders.
        let height = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(height);

        let lines: Vec<Line> = logs[start..]
            .iter()
            .map(|l| match l.split_once(' ') {
                Some((time, msg)) => Line::from(vec![
                    Span::styled(time.to_string(), Style::default().fg(Color::DarkGray)),
                    Span::raw(format!(" {msg}")),
                ]),
                None => Line::from(l.clone()),
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Logs")),
            area,
        );
    }
}
