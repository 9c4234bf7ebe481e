//! # Run Configuration
//!
//! [`RunConfig`] holds everything a batch run needs once the command line has
//! been parsed. It is built by the binary but lives in the library so the
//! whole pipeline can be driven from tests.

use std::path::PathBuf;

use crate::defaults;
use crate::error::{Error, Result};
use crate::locator::InputMode;
use crate::tools::{CommandSpec, SystemTools};

/// Settings for one `analyze` run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// File listing the repositories.
    pub input: PathBuf,
    /// How `input` is read.
    pub input_mode: InputMode,
    /// Where results go; stdout when absent.
    pub output: Option<PathBuf>,
    /// Library file to skip known repositories and store new results.
    pub library: Option<PathBuf>,
    /// Analyze repositories even when the library already has them.
    pub refresh: bool,
    pub fetch: CommandSpec,
    pub measure: CommandSpec,
    /// Language whose statistics are kept.
    pub language: String,
    /// Pass measurement output through unprocessed.
    pub raw: bool,
    /// Maximum number of repositories analyzed at once.
    pub jobs: usize,
}

impl RunConfig {
    /// A configuration with every option at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            input_mode: InputMode::Lines,
            output: None,
            library: None,
            refresh: false,
            fetch: CommandSpec::new(defaults::FETCH_CMD, defaults::FETCH_ARGS.into()),
            measure: CommandSpec::new(defaults::MEASURE_CMD, defaults::MEASURE_ARGS.into()),
            language: defaults::LANGUAGE.to_string(),
            raw: false,
            jobs: defaults::JOBS,
        }
    }

    /// Rejects option combinations that cannot work together.
    ///
    /// Runs before any file is opened or command started.
    pub fn validate(&self) -> Result<()> {
        if self.raw && self.library.is_some() {
            return Err(Error::Configuration {
                message: "Cannot use --raw with --library".to_string(),
            });
        }
        if self.jobs == 0 {
            return Err(Error::Configuration {
                message: "--jobs must be at least 1".to_string(),
            });
        }
        if self.language.trim().is_empty() {
            return Err(Error::Configuration {
                message: "--language must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The host commands described by this configuration.
    pub fn system_tools(&self) -> SystemTools {
        SystemTools::new(self.fetch.clone(), self.measure.clone(), !self.raw)
    }
}
