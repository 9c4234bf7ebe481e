//! # Terminal Output
//!
//! Decides whether the run may decorate its output with a live progress bar
//! and status markers, based on the `--color` flag and the environment:
//!
//! - `--color=always|never` wins over everything else.
//! - In `auto` mode decoration is off when `NO_COLOR` is set (any value),
//!   when `CLICOLOR=0` or `TERM=dumb`, or when stderr is not a terminal.
//!   `CLICOLOR_FORCE=1` turns it back on for non-terminals.
//!
//! Progress lines themselves are always printed; only the decoration changes.

use std::env;

/// Output configuration for progress decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether the progress bar and emoji markers are used.
    pub decorate: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let decorate = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_terminal(),
        };
        Self { decorate }
    }

    /// Plain output, as used when stdout is captured.
    pub fn plain() -> Self {
        Self { decorate: false }
    }

    fn detect_terminal() -> bool {
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

        let term = console::Term::stderr();
        term.is_term() && term.features().colors_supported()
    }

    /// Returns `emoji_str` when decorating, `plain` otherwise.
    pub fn marker<'a>(&self, emoji_str: &'a str, plain: &'a str) -> &'a str {
        if self.decorate {
            emoji_str
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
