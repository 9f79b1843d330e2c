//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, RED, RESET};

/// Hours with exactly two decimals (`7.5` → `7.50`).
pub fn format_hours(hours: f64) -> String {
    // avoid "-0.00" for tiny negative residues
    let rounded = (hours * 100.0).round() / 100.0;
    let value = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", value)
}

/// Signed hours: `+1.50`, `-0.25`, `0.00`.
pub fn format_signed_hours(hours: f64) -> String {
    let s = format_hours(hours);
    if s.starts_with('-') || s == "0.00" {
        s
    } else {
        format!("+{s}")
    }
}

/// Difference column for terminals:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn colorize_difference(hours: f64) -> String {
    let s = format_signed_hours(hours);
    if s.starts_with('+') {
        format!("{GREEN}{s}{RESET}")
    } else if s.starts_with('-') {
        format!("{RED}{s}{RESET}")
    } else {
        s
    }
}
