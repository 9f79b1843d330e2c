use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::PathBuf;

/// Handle the `init` command
///
/// Writes the default configuration (to `--config` when given). An existing
/// file is kept unless `--force`.
pub fn handle(cli: &Cli, force: bool) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    info("Initializing attendiff…");
    Config::default().save(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
