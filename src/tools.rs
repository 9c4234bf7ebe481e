//! # External Commands
//!
//! The fetch command (normally `git clone --depth 1`) and the measurement
//! command (normally `cloc`) are run as child processes. They sit behind the
//! [`ExternalTools`] trait so the pipeline can be exercised in tests without
//! network access or a real line counter.
//!
//! Exit statuses are logged but not treated as failures: a fetch that fails
//! leaves an empty workspace, and the measurement of an empty workspace does
//! not contain the language of interest, so the repository is dropped later
//! with a measurement diagnostic. Only a command that cannot be started at all
//! produces an error here.

use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Flag asking the measurement command for a JSON report.
pub const JSON_FLAG: &str = "--json";

/// Trait for the external commands - allows stubbing in tests
pub trait ExternalTools: Send + Sync {
    /// Materializes the repository at `url` into the empty directory
    /// `workspace` and waits for the command to finish.
    fn fetch(&self, url: &str, workspace: &Path) -> Result<()>;

    /// Measures `workspace` and returns everything the command printed on
    /// standard output.
    fn measure(&self, workspace: &Path) -> Result<String>;
}

/// Whitespace separated argument list, as accepted on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgList(pub Vec<String>);

impl From<&str> for ArgList {
    fn from(s: &str) -> Self {
        Self(s.split_whitespace().map(str::to_string).collect())
    }
}

impl FromStr for ArgList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// An executable plus the arguments that always precede the per-call ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: ArgList) -> Self {
        Self {
            program: program.into(),
            args: args.0,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn spawn_error(&self, e: std::io::Error) -> Error {
        Error::ExternalProcess {
            command: self.describe(),
            message: e.to_string(),
        }
    }
}

/// The default implementation of `ExternalTools`, which runs the configured
/// programs on the host.
#[derive(Debug, Clone)]
pub struct SystemTools {
    fetch: CommandSpec,
    measure: CommandSpec,
    json_report: bool,
}

impl SystemTools {
    /// `json_report` appends [`JSON_FLAG`] to the measurement arguments.
    pub fn new(fetch: CommandSpec, measure: CommandSpec, json_report: bool) -> Self {
        Self {
            fetch,
            measure,
            json_report,
        }
    }
}

impl ExternalTools for SystemTools {
    fn fetch(&self, url: &str, workspace: &Path) -> Result<()> {
        debug!("Running {} {} {}", self.fetch.describe(), url, workspace.display());
        let status = self
            .fetch
            .command()
            .arg(url)
            .arg(workspace)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.fetch.spawn_error(e))?;

        if !status.success() {
            warn!("Fetch command exited with {} for {}", status, url);
        }
        Ok(())
    }

    fn measure(&self, workspace: &Path) -> Result<String> {
        let mut command = self.measure.command();
        if self.json_report {
            command.arg(JSON_FLAG);
        }
        debug!("Running {} on {}", self.measure.describe(), workspace.display());

        let output = command
            .arg(workspace)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.measure.spawn_error(e))?;

        if !output.status.success() {
            warn!(
                "Measurement command exited with {} for {}: {}",
                output.status,
                workspace.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
