use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::ui::{app::App, types::TodoInputMode};

impl App {
    pub(in crate::ui) fn draw_todos(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .todos
            .tasks()
            .iter()
            .map(|task| {
                let checkbox = if task.done { "[x]" } else { "[ ]" };
                let mut style = if task.done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                if self.todo_mode == TodoInputMode::Editing(task.id) {
                    style = style.fg(Color::Yellow);
                }
                ListItem::new(format!("{checkbox} {}", task.text)).style(style)
            })
            .collect();

        let title = format!(
            "Tasks ({} left) | ↑↓ select | Ctrl+D: done | Ctrl+E: edit | Ctrl+X: delete",
            self.todos.remaining()
        );

        let mut state = ListState::default();
        if !self.todos.tasks().is_empty() {
            state.select(Some(self.selected_task));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut state);
    }
}
