//! To-do screen state management.

use super::super::{
    app::App,
    types::{InputStatus, TodoInputMode},
};

pub struct TodoHandler<'a> {
    app: &'a mut App,
}

impl<'a> TodoHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn input_status(&self) -> InputStatus {
        self.app.input_status()
    }

    /// Adds a task, or saves the edit in progress.
    pub fn submit_input(&mut self) {
        if !matches!(self.input_status(), InputStatus::Valid) {
            return;
        }

        match self.app.todo_mode {
            TodoInputMode::Adding => {
                if let Some(id) = self.app.todos.add(&self.app.input) {
                    self.app.log(format!("Added task {id}"));
                    self.app.selected_task = self.app.todos.tasks().len() - 1;
                }
            }
            TodoInputMode::Editing(id) => {
                if self.app.todos.edit(id, &self.app.input) {
                    self.app.log(format!("Edited task {id}"));
                } else {
                    self.app.log(format!("Task {id} no longer exists"));
                }
                self.app.todo_mode = TodoInputMode::Adding;
            }
        }
        self.app.input.clear();
    }

    pub fn begin_edit(&mut self) {
        let Some(task) = self.app.todos.tasks().get(self.app.selected_task) else {
            return;
        };
        self.app.todo_mode = TodoInputMode::Editing(task.id);
        self.app.input = task.text.clone();
    }

    pub fn cancel_edit(&mut self) {
        if self.app.todo_mode != TodoInputMode::Adding {
            self.app.todo_mode = TodoInputMode::Adding;
            self.app.input.clear();
        }
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.app.todos.toggle(id);
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.app.todos.delete(id) {
            self.app.log(format!("Deleted task {id}"));
            if self.app.todo_mode == TodoInputMode::Editing(id) {
                self.cancel_edit();
            }
            let len = self.app.todos.tasks().len();
            self.app.selected_task = self.app.selected_task.min(len.saturating_sub(1));
        }
    }

    pub fn select_prev(&mut self) {
        self.app.selected_task = self.app.selected_task.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.app.selected_task + 1 < self.app.todos.tasks().len() {
            self.app.selected_task += 1;
        }
    }

    fn selected_id(&self) -> Option<crate::todo::TaskId> {
        self.app.todos.tasks().get(self.app.selected_task).map(|t| t.id)
    }
}
