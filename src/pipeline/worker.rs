//! Analysis Worker: one repository's fetch, measure and cleanup cycle.
//!
//! Every worker gets its own scratch directory from `tempfile`. The directory
//! is removed when the worker is done whether or not the commands succeeded;
//! it is also removed if the worker unwinds, since the `TempDir` guard owns it.

use log::{debug, warn};
use tempfile::TempDir;

use super::RawWorkerResult;
use crate::error::Result;
use crate::progress::Progress;
use crate::tools::ExternalTools;

/// Prefix of every scratch workspace directory name.
pub const WORKSPACE_PREFIX: &str = "loc-wizard-";

/// Fetches and measures `url` in a fresh workspace.
///
/// Command failures are reported through `progress` and leave an empty
/// measurement, which the aggregator later drops with its own diagnostic.
/// Only failing to create the workspace is returned as an error.
pub fn analyze(url: &str, tools: &dyn ExternalTools, progress: &Progress) -> Result<RawWorkerResult> {
    let workspace = tempfile::Builder::new().prefix(WORKSPACE_PREFIX).tempdir()?;
    let position = progress.start(url, workspace.path());

    if let Err(e) = tools.fetch(url, workspace.path()) {
        progress.diagnostic(format!("{} ({})", e, url));
    }

    let raw_output = match tools.measure(workspace.path()) {
        Ok(stdout) => stdout,
        Err(e) => {
            progress.diagnostic(format!("{} ({})", e, url));
            String::new()
        }
    };

    release(workspace);
    progress.finish(url, position);

    Ok(RawWorkerResult {
        raw_output,
        url: url.to_string(),
    })
}

fn release(workspace: TempDir) {
    let path = workspace.path().to_path_buf();
    match workspace.close() {
        Ok(()) => debug!("Removed workspace {}", path.display()),
        Err(e) => warn!("Could not remove workspace {}: {}", path.display(), e),
    }
}
