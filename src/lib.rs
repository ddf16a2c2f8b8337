pub mod args;
pub mod board;
pub mod config;
pub mod game;
pub mod history;
pub mod logging;
pub mod products;
pub mod todo;
pub mod ui;
