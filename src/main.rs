use anyhow::{Context, Result};
use clap::Parser;

use component_lab::{args::Args, config::Config, logging::init_logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("failed to load config")?;
    if let Some(screen) = args.screen {
        config.ui.start_screen = screen;
    }
    if args.no_log {
        config.logging.enabled = false;
    }

    let _guard = init_logging(&config.logging)?;
    tracing::info!(
        screen = config.ui.start_screen.title(),
        "component-lab starting"
    );

    let result = run_ui(&config);
    if let Err(e) = &result {
        tracing::error!("UI exited with error: {e:#}");
    }
    result
}
