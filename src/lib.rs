//! attendiff library root.
//! Exposes the reconciliation engine, the exporters, the record sources and
//! the CLI dispatcher used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cli, *force),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Diff { .. } => cli::commands::diff::handle(cli, cfg),
        Commands::Weekly { .. } => cli::commands::weekly::handle(cli, cfg),
        Commands::Timesheet { .. } => cli::commands::timesheet::handle(cli, cfg),
        Commands::Leave { .. } => cli::commands::leave::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` must work even when the existing config is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(cli.config.as_deref().map(Path::new))?,
    };

    // 3️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
