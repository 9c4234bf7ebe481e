//! # Error Handling
//!
//! This module defines the centralized error type for `loc-wizard`. It uses
//! the `thiserror` library to build a single `Error` enum covering every
//! anticipated failure mode, with messages that name the URL, path or input
//! line involved.
//!
//! ## Fatal and per-item errors
//!
//! Errors fall into two groups:
//!
//! - **Fatal**: `Configuration`, `Library` and `Input` abort the whole run
//!   before (or instead of) any repository work. Each maps to its own process
//!   exit code through [`Error::exit_code`].
//! - **Per-item**: `LocatorParse`, `MeasurementParse` and `ExternalProcess`
//!   describe a single repository or input line. They are reported to the
//!   operator and dropped; the batch carries on.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! functions throughout the library.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Main error type for loc-wizard operations
#[derive(Error, Debug)]
pub enum Error {
    /// Options were combined in a way that cannot work, e.g. raw output
    /// together with a library file.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The library file could not be statted, created, read or decoded.
    #[error("Could not stat or create library file '{}': {message}", path.display())]
    Library { path: PathBuf, message: String },

    /// The input file could not be read or is not a valid feed document.
    #[error("Could not read input file '{}': {message}", path.display())]
    Input { path: PathBuf, message: String },

    /// A single input line did not start with a usable repository URL.
    #[error("Cannot parse '{line}' to valid URL.")]
    LocatorParse { line: String },

    /// The measurement output for a repository could not be turned into a
    /// snapshot.
    #[error("Could not read measurement for {url}: {message}")]
    MeasurementParse { url: String, message: String },

    /// An external command could not be started.
    #[error("External command '{command}' failed: {message}")]
    ExternalProcess { command: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error when it ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Configuration { .. } => exit_codes::CONFIGURATION,
            Error::Library { .. } => exit_codes::LIBRARY,
            _ => exit_codes::GENERAL,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
