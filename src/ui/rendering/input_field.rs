//! To-do input line with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    types::{InputStatus, TodoInputMode},
};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (border_color, subtitle) = match self.input_status() {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let text = format!("{}▌", self.input);

        let help_text = match self.todo_mode {
            TodoInputMode::Adding => "Enter = add task",
            TodoInputMode::Editing(_) => "Enter = save | Esc = cancel",
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Input {} | {}", subtitle, help_text)),
            ),
            area,
        );
    }

    pub(in crate::ui) fn input_status(&self) -> InputStatus {
        if self.input.is_empty() {
            InputStatus::Incomplete
        } else if self.input.trim().is_empty() {
            InputStatus::Invalid("task text is blank")
        } else {
            InputStatus::Valid
        }
    }
}
