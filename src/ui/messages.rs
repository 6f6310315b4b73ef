use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Section header above a report
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// Status line shown after a successful load.
pub fn status_success(file_name: &str) -> String {
    format!("File '{file_name}' uploaded successfully!")
}

/// Status line shown instead of the success message when loading fails.
pub fn status_error<E: fmt::Display>(err: E) -> String {
    format!("Error: {err}")
}
