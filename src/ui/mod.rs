mod app;
mod handlers;
mod rendering;
mod terminal;
#[cfg(test)]
mod tests;
mod types;

pub use app::App;
pub use types::{InputStatus, LogBuffer, Screen, TodoInputMode};

use anyhow::Result;

use crate::{
    config::Config,
    products::{builtin_catalog, load_catalog},
};

/// Entry point for running the UI.
pub fn run_ui(config: &Config) -> Result<()> {
    let catalog = match &config.products.catalog {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };
    let logs = LogBuffer::new();

    let mut app = App::new(config, catalog, logs);

    let (mut terminal, guard) = terminal::setup_terminal()?;
    let result = app.run(&mut terminal);
    guard.restore();

    result
}
