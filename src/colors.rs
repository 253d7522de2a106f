// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Terminal color scheme
//!
//! - Green: uploaded, authorized
//! - Red: failed files, errors
//! - Yellow: warnings, counts
//! - Cyan: paths and account names
//! - Dim: timestamps, separators

use colored::{ColoredString, Colorize};

/// Status indicators with consistent colors
pub struct Status;

impl Status {
    /// `[OK]` in green
    pub fn ok() -> ColoredString {
        "[OK]".green()
    }

    /// `[i]` in cyan
    pub fn info() -> ColoredString {
        "[i]".cyan()
    }

    /// `[!]` in yellow
    pub fn warn() -> ColoredString {
        "[!]".yellow()
    }

    /// `[X]` in red
    pub fn error() -> ColoredString {
        "[X]".red()
    }

    /// `[=]` in blue, end-of-pass summary
    pub fn summary() -> ColoredString {
        "[=]".blue()
    }
}

/// Text styling helpers
pub trait StyledText {
    fn header(&self) -> ColoredString;
    fn path(&self) -> ColoredString;
    fn count(&self) -> ColoredString;
    fn err(&self) -> ColoredString;
    fn dim(&self) -> ColoredString;
}

impl<T: AsRef<str> + ?Sized> StyledText for T {
    fn header(&self) -> ColoredString {
        self.as_ref().magenta().bold()
    }

    fn path(&self) -> ColoredString {
        self.as_ref().cyan()
    }

    fn count(&self) -> ColoredString {
        self.as_ref().yellow()
    }

    fn err(&self) -> ColoredString {
        self.as_ref().red()
    }

    fn dim(&self) -> ColoredString {
        self.as_ref().dimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_markers_keep_text() {
        colored::control::set_override(false);
        assert_eq!(Status::ok().to_string(), "[OK]");
        assert_eq!(Status::summary().to_string(), "[=]");
        assert_eq!(Status::error().to_string(), "[X]");
    }

    #[test]
    fn test_styled_text_on_str_and_string() {
        colored::control::set_override(false);
        assert_eq!("/Photos".path().to_string(), "/Photos");
        assert_eq!(String::from("3").count().to_string(), "3");
    }
}
