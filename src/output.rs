//! Styled terminal messages for the CLI.
//!
//! Commands report per-item progress through these helpers. `error` is
//! for a failure the command survives, such as one bad site in a
//! listing; the fatal path exits through `anyhow` instead. `header`
//! titles a section of output.

use console::style;

/// Green check: an operation completed.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Neutral progress note.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Degraded but acceptable outcome, e.g. a remote-reported page failure.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Per-item failure, printed to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Bold underlined section title.
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}
