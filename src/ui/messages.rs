//! User-facing status lines.
//!
//! `info`/`success` go to stdout, `warning`/`error` to stderr, so a document
//! written to stdout is never interleaved with diagnostics. Colors are dropped
//! when `NO_COLOR` is set or the stream is not a terminal.

use std::fmt;
use std::io::{self, IsTerminal};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn use_color(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

fn line(color: &str, icon: &str, msg: &dyn fmt::Display, colored: bool) -> String {
    if colored {
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let colored = use_color(io::stdout().is_terminal());
    println!("{}", line(FG_BLUE, ICON_INFO, &msg, colored));
}

pub fn success<T: fmt::Display>(msg: T) {
    let colored = use_color(io::stdout().is_terminal());
    println!("{}", line(FG_GREEN, ICON_OK, &msg, colored));
}

pub fn warning<T: fmt::Display>(msg: T) {
    let colored = use_color(io::stderr().is_terminal());
    eprintln!("{}", line(FG_YELLOW, ICON_WARN, &msg, colored));
}

pub fn error<T: fmt::Display>(msg: T) {
    let colored = use_color(io::stderr().is_terminal());
    eprintln!("{}", line(FG_RED, ICON_ERR, &msg, colored));
}
