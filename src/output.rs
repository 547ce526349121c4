//! # Output Configuration and Rendering
//!
//! This module decides whether CLI output may use colors and emojis, and
//! renders books and members as the lines the CLI prints.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use crate::record::{Book, Member};
use console::style;
use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` are taken at face value. Anything else means
    /// auto-detection, where colors are off if `NO_COLOR` is set,
    /// `CLICOLOR=0`, `TERM=dumb`, or stdout is not a color terminal (unless
    /// `CLICOLOR_FORCE` is set).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables colors, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// One book as a single line, e.g. `Dune by Herbert (1965)`
pub fn render_book(config: &OutputConfig, book: &Book) -> String {
    let title = if config.use_color {
        style(&book.title).bold().to_string()
    } else {
        book.title.clone()
    };
    match book.year {
        Some(year) => format!("{} by {} ({})", title, book.author, year),
        None => format!("{} by {}", title, book.author),
    }
}

/// One member as a single line, e.g. `Alice [M1]`
pub fn render_member(config: &OutputConfig, member: &Member) -> String {
    let id = if config.use_color {
        style(&member.member_id).cyan().to_string()
    } else {
        member.member_id.clone()
    };
    format!("{} [{}]", member.name, id)
}

/// Numbered listing of books, one per line, starting at 1.
pub fn render_books<'a, I>(config: &OutputConfig, books: I) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    numbered(books.into_iter().map(|b| render_book(config, b)))
}

/// Numbered listing of members, one per line, starting at 1.
pub fn render_members<'a, I>(config: &OutputConfig, members: I) -> String
where
    I: IntoIterator<Item = &'a Member>,
{
    numbered(members.into_iter().map(|m| render_member(config, m)))
}

fn numbered(lines: impl Iterator<Item = String>) -> String {
    lines
        .enumerate()
        .map(|(i, line)| format!("{}) {}\n", i + 1, line))
        .collect()
}
