//! Task list driven by a reducer.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Added { id: TaskId, text: String },
    Changed(Task),
    Deleted { id: TaskId },
}

/// Hands out task ids for one list. Each list owns its own counter.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

/// Applies `action` to `tasks`, producing the next list.
pub fn reduce(tasks: Vec<Task>, action: TaskAction) -> Vec<Task> {
    match action {
        TaskAction::Added { id, text } => {
            let mut tasks = tasks;
            tasks.push(Task {
                id,
                text,
                done: false,
            });
            tasks
        }
        TaskAction::Changed(task) => tasks
            .into_iter()
            .map(|t| if t.id == task.id { task.clone() } else { t })
            .collect(),
        TaskAction::Deleted { id } => tasks.into_iter().filter(|t| t.id != id).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct TodoList {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TodoList {
    /// Builds a list from `(text, done)` seeds, numbering them from 0.
    pub fn new<I, S>(initial: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let tasks: Vec<Task> = initial
            .into_iter()
            .enumerate()
            .map(|(i, (text, done))| Task {
                id: TaskId(i as u32),
                text: text.into(),
                done,
            })
            .collect();

        Self::from_tasks(tasks)
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next = tasks.iter().map(|t| t.id.0 + 1).max().unwrap_or(0);
        Self {
            tasks,
            ids: IdGenerator::starting_at(next),
        }
    }

    pub fn dispatch(&mut self, action: TaskAction) {
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = reduce(tasks, action);
    }

    /// Adds a task; blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        self.dispatch(TaskAction::Added {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(mut task) = self.get(id).cloned() else {
            return false;
        };
        task.done = !task.done;
        self.dispatch(TaskAction::Changed(task));
        true
    }

    pub fn edit(&mut self, id: TaskId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(mut task) = self.get(id).cloned() else {
            return false;
        };
        task.text = text.to_string();
        self.dispatch(TaskAction::Changed(task));
        true
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.dispatch(TaskAction::Deleted { id });
        self.tasks.len() != before
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new([
            ("Visit Kafka Museum", true),
            ("Watch a puppet show", false),
            ("Lennon Wall pic", false),
        ])
    }
}
