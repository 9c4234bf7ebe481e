//! Work Filter: decides which repositories need analysis.
//!
//! Without a library, or with `--refresh-library`, everything goes through.
//! Otherwise a repository whose URL is already stored is skipped so it is
//! never fetched again. Descriptors without a URL always go through; they
//! only carry a parse error and are reported by the orchestrator.

use crate::error::Result;
use crate::library::LibraryStore;
use crate::locator::RepoDescriptor;

/// The descriptors left to process, plus the URLs skipped as cached.
#[derive(Debug, Clone, Default)]
pub struct WorkSet {
    pub descriptors: Vec<RepoDescriptor>,
    pub skipped: Vec<String>,
}

impl WorkSet {
    /// Number of descriptors that will start a worker.
    pub fn pending(&self) -> usize {
        self.descriptors.iter().filter(|d| d.url.is_some()).count()
    }
}

/// Filters `descriptors` against `library`.
pub fn select(
    descriptors: Vec<RepoDescriptor>,
    library: Option<&mut LibraryStore>,
    refresh: bool,
) -> Result<WorkSet> {
    let library = match library {
        Some(library) if !refresh => library,
        _ => {
            return Ok(WorkSet {
                descriptors,
                skipped: Vec::new(),
            })
        }
    };

    let mut work = WorkSet::default();
    for descriptor in descriptors {
        if let Some(url) = &descriptor.url {
            if library.contains(url)? {
                work.skipped.push(url.clone());
                continue;
            }
        }
        work.descriptors.push(descriptor);
    }
    Ok(work)
}
