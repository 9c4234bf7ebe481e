//! Pipeline Orchestrator: fans the work list out to workers and joins them.
//!
//! Workers run on a dedicated `rayon` pool that is `jobs` threads wide, so at
//! most `jobs` fetch/measure pairs are in flight at once. The call returns only
//! after every started worker has finished; a failing worker never cancels the
//! others. Results are collected in completion order.

use std::sync::{Mutex, PoisonError};

use log::debug;
use rayon::prelude::*;

use super::{worker, RawWorkerResult};
use crate::error::{Error, Result};
use crate::locator::RepoDescriptor;
use crate::progress::Progress;
use crate::tools::ExternalTools;

/// Everything the workers produced.
#[derive(Debug, Default)]
pub struct Outcome {
    /// One result per finished worker, in completion order.
    pub results: Vec<RawWorkerResult>,
    /// Descriptors and workers that were reported and produced nothing.
    pub rejected: usize,
}

/// Runs a worker for every descriptor with a URL and waits for all of them.
///
/// Descriptors without a URL are reported through `progress` up front and
/// start no worker.
pub fn run(
    descriptors: Vec<RepoDescriptor>,
    tools: &dyn ExternalTools,
    jobs: usize,
    progress: &Progress,
) -> Result<Outcome> {
    let mut urls = Vec::with_capacity(descriptors.len());
    let mut rejected = 0;
    for descriptor in descriptors {
        match descriptor.url {
            Some(url) => urls.push(url),
            None => {
                rejected += 1;
                progress.diagnostic(
                    descriptor
                        .error
                        .as_deref()
                        .unwrap_or("input entry has neither URL nor error"),
                );
            }
        }
    }

    if urls.is_empty() {
        return Ok(Outcome {
            results: Vec::new(),
            rejected,
        });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .thread_name(|i| format!("loc-worker-{}", i))
        .build()
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    debug!("Analyzing {} repositories with {} workers", urls.len(), jobs);

    let results: Mutex<Vec<RawWorkerResult>> = Mutex::new(Vec::with_capacity(urls.len()));
    let failures: Mutex<usize> = Mutex::new(0);

    pool.install(|| {
        urls.par_iter()
            .with_max_len(1)
            .for_each(|url| match worker::analyze(url, tools, progress) {
                Ok(result) => results
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(result),
                Err(e) => {
                    progress.diagnostic(format!("{} ({})", e, url));
                    *failures.lock().unwrap_or_else(PoisonError::into_inner) += 1;
                }
            });
    });

    Ok(Outcome {
        results: results.into_inner().unwrap_or_else(PoisonError::into_inner),
        rejected: rejected + failures.into_inner().unwrap_or_else(PoisonError::into_inner),
    })
}
