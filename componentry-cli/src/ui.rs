//! Console output helpers shared by the installer steps

use console::{style, Emoji};
use std::fmt::Display;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "√ ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "! ");
static INFO: Emoji<'_, '_> = Emoji("ℹ ", "i ");

/// Section heading for a pipeline step
pub fn step(message: impl Display) {
    println!("{}", style(message).cyan().bold());
}

/// A step or file completed
pub fn success(message: impl Display) {
    println!("  {}{}", style(CHECK).green(), message);
}

/// A best-effort step failed; the run continues
pub fn warning(message: impl Display) {
    println!("  {}{}", style(WARN).yellow(), style(message).yellow());
}

/// A step failed outright
pub fn failure(message: impl Display) {
    println!("  {}{}", style(CROSS).red(), style(message).red());
}

/// Informational no-op, such as content already being present
pub fn info(message: impl Display) {
    println!("  {}{}", INFO, style(message).dim());
}

/// Shell command the user can copy
pub fn command(line: impl Display) {
    println!("     {} {}", style("$").dim(), style(line).cyan());
}

/// Numbered manual-remediation recipe
pub fn manual_steps(title: &str, steps: &[String]) {
    println!();
    println!("  {}", style(title).bold());
    for (number, text) in steps.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", number + 1)).cyan(), text);
    }
    println!();
}
