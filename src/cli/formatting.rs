//! Formatting utilities for CLI output.
//!
//! Error messages are styled only when they go to a terminal, so scripts
//! reading stderr see the plain text.

use std::io::IsTerminal;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats an error for stderr, styled only when stderr is a terminal.
pub fn format_stderr_error(text: &str) -> String {
    if std::io::stderr().is_terminal() {
        format_error(text)
    } else {
        text.to_string()
    }
}

/// Text to print for `output`, ending in a newline.
///
/// Rendered trees already end with a blank line of their own and are kept
/// as they are.
pub fn terminate_output(output: &str) -> String {
    if output.ends_with('\n') {
        output.to_string()
    } else {
        format!("{output}\n")
    }
}
