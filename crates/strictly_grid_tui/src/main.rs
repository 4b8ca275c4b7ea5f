//! Strictly Grid - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_grid_tui::{App, Cli, Config, logging};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.log_file, cli.log_level);

    logging::init(config.log_file(), config.log_level())?;
    info!(?config, "Configuration resolved");

    let theme = config
        .theme()
        .resolve()
        .context("Invalid theme configuration")?;

    strictly_grid_tui::run(App::new(theme))
}
