//! Region quadtree tool.
//!
//! Reads trees written in nested-list notation (`[[1, 0, 0, 1], 0, 1, 0]`)
//! and reports on them, renders them to PNG or a text preview, and encodes
//! square black-and-white images back into notation.

mod cli;
mod commands;
mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    if let Some(order) = cli.order {
        config.order = order.into();
    }
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &config, &mut out)
}
