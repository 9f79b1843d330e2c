// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether `path` may be created or overwritten.
///
/// - file missing → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}

/// Resolve `--file`: a directory receives `default_name`.
pub(crate) fn resolve_target(file: &str, default_name: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_dir() {
        path.join(default_name)
    } else {
        path.to_path_buf()
    }
}

/// Write a rendered document to `file`, or to stdout when `file` is None.
pub fn write_output(
    content: &str,
    file: Option<&str>,
    default_name: &str,
    label: &str,
    force: bool,
) -> AppResult<()> {
    match file {
        None => {
            let mut out = io::stdout().lock();
            out.write_all(content.as_bytes())?;
            out.flush()?;
        }
        Some(f) => {
            let path = resolve_target(f, default_name);
            ensure_writable(&path, force)?;
            fs::write(&path, content)?;
            notify_export_success(label, &path);
        }
    }
    Ok(())
}
