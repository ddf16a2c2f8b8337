use std::sync::{Arc, Mutex};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::todo::TaskId;

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), msg);
        let mut buf = self.inner.lock().unwrap();
        buf.push(line);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level screens, one per example.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Game,
    Products,
    Todos,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Game, Screen::Products, Screen::Todos];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Game => "Game",
            Screen::Products => "Products",
            Screen::Todos => "Todos",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Game => 0,
            Screen::Products => 1,
            Screen::Todos => 2,
        }
    }

    pub fn next(self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }
}

/// Input validation status.
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// What Enter does with the to-do input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoInputMode {
    Adding,
    Editing(TaskId),
}
