//! # Repository Locator Parser
//!
//! Turns the input file into an ordered list of [`RepoDescriptor`]s. Two input
//! formats are supported:
//!
//! - **Line mode** ([`parse_lines`]): every line must start with an
//!   `http://` or `https://` URL. Whatever follows the first whitespace is
//!   ignored, so annotated lists such as `https://github.com/a/b  # 1.2k stars`
//!   work as-is.
//! - **Feed mode** ([`parse_feed`]): a JSON document `{ "items": [{ "name":
//!   "owner/repo" }, ...] }` as exported by the GitHub search tool at
//!   seart-ghs.si.usi.ch. Each item becomes `https://github.com/{name}`.
//!
//! Every line or item produces exactly one descriptor. Those that cannot be
//! turned into a URL (blank lines included) carry the reason instead of a URL,
//! so they can be reported in order.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Host prefix for repository names in a structured feed.
pub const FEED_URL_PREFIX: &str = "https://github.com/";

/// How the input file should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One URL per line.
    #[default]
    Lines,
    /// A JSON feed of repository names.
    Feed,
}

/// One entry of the input: a repository URL, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    pub url: Option<String>,
    pub error: Option<String>,
}

impl RepoDescriptor {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            error: None,
        }
    }

    pub fn from_error(error: impl Into<String>) -> Self {
        Self {
            url: None,
            error: Some(error.into()),
        }
    }
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+").expect("URL pattern is valid"))
}

/// Parses a single input line.
pub fn parse_line(line: &str) -> RepoDescriptor {
    match url_pattern().find(line.trim_start()) {
        Some(found) if url::Url::parse(found.as_str()).is_ok() => {
            RepoDescriptor::from_url(found.as_str())
        }
        _ => RepoDescriptor::from_error(
            Error::LocatorParse {
                line: line.to_string(),
            }
            .to_string(),
        ),
    }
}

/// Parses line-mode input text.
pub fn parse_lines(content: &str) -> Vec<RepoDescriptor> {
    content.lines().map(parse_line).collect()
}

// Untyped: `parse_feed` checks each item on its own.
#[derive(Deserialize)]
struct Feed {
    items: Vec<Value>,
}

/// Parses a structured feed document.
///
/// A document that is not a JSON object with an `items` array is an error for
/// the whole input. Individual items without a non-blank string `name` become
/// error descriptors.
pub fn parse_feed(content: &str) -> std::result::Result<Vec<RepoDescriptor>, serde_json::Error> {
    let feed: Feed = serde_json::from_str(content)?;
    Ok(feed
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.get("name").and_then(Value::as_str).map(str::trim) {
            Some(name) if !name.is_empty() => {
                RepoDescriptor::from_url(format!("{}{}", FEED_URL_PREFIX, name))
            }
            _ => RepoDescriptor::from_error(format!("Feed item #{} has no repository name.", index + 1)),
        })
        .collect())
}

/// Reads and parses the input file in the given mode.
pub fn read_input(path: &Path, mode: InputMode) -> Result<Vec<RepoDescriptor>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Input {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match mode {
        InputMode::Lines => Ok(parse_lines(&content)),
        InputMode::Feed => parse_feed(&content).map_err(|e| Error::Input {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
