//! Move history list for time travel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .game
            .moves(self.sort_order)
            .into_iter()
            .map(|m| {
                let mut text = if m.is_current {
                    if m.index == 0 {
                        "You are at game start".to_string()
                    } else {
                        format!("You are at move #{}", m.index)
                    }
                } else {
                    m.label
                };
                if let Some((row, col)) = m.location {
                    text.push_str(&format!(" ({row}, {col})"));
                }

                let style = if m.is_current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected_move));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Moves | ↑↓ select | Enter: jump | Ctrl+O: order | Ctrl+N: new"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut state);
    }
}
