//! Terminal styling for tablewright status messages.
//!
//! Only human-facing lines go through here. Generated SQL is printed raw so it
//! can be piped into `mysql` or redirected to a file.

use colored::Colorize;

/// Section heading, e.g. `Checking configuration...`
pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

pub fn label(text: &str) -> String {
    format!("{}", text.bright_blue())
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

/// `Error: <msg>` line printed by `main` before exiting with failure
pub fn err_line(text: &str) -> String {
    format!("{} {}", "Error:".red().bold(), text)
}

/// Column count suffix shown next to each table by `check`
pub fn column_count(count: usize) -> String {
    let noun = if count == 1 { "column" } else { "columns" };
    muted(&format!("({count} {noun})"))
}

pub fn status_ok() -> String {
    format!("{}", "OK".green())
}

pub fn status_error() -> String {
    format!("{}", "ERROR".red())
}
