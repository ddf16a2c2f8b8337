use clap::Parser;
use std::path::PathBuf;

use crate::ui::Screen;

#[derive(Parser, Debug)]
#[command(name = "component-lab", about = "Tic-tac-toe, a product table and a to-do list in the terminal")]
pub struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open first
    #[arg(long, value_enum)]
    pub screen: Option<Screen>,

    /// Disable file logging
    #[arg(long)]
    pub no_log: bool,
}
