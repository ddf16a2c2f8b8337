use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();

        let tabs = Tabs::new(titles)
            .select(self.screen.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Tab / Ctrl+G Ctrl+P Ctrl+T: switch | Ctrl+Q: quit"),
            );

        f.render_widget(tabs, area);
    }
}
