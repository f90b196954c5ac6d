//! Output functions for consistent CLI formatting

use crate::error::{BumpError, BumpResult};
use console::{style, Emoji};
use serde::Serialize;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static INFO: Emoji<'_, '_> = Emoji("• ", "[INFO] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Display a success step
pub fn step_ok(message: &str) {
    println!("{}{}", style(CHECK).green(), message);
}

/// Display an info step
pub fn step_info(message: &str) {
    println!("{}{}", style(INFO).cyan(), message);
}

/// Display a warning step
pub fn step_warn(message: &str) {
    println!("{}{}", style(WARN).yellow(), message);
}

/// Print styled key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> BumpResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BumpError::User(format!("Failed to render JSON output: {e}")))?;
    println!("{json}");
    Ok(())
}
