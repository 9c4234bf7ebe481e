//! # Analysis Pipeline
//!
//! A run moves through these steps:
//!
//! 1. **Locate** ([`crate::locator`]): read the input into repository
//!    descriptors.
//! 2. **Filter** ([`filter`]): drop repositories the library already knows,
//!    unless a refresh is forced.
//! 3. **Analyze** ([`orchestrator`], [`worker`]): fetch and measure every
//!    remaining repository on a bounded worker pool, waiting for all of them.
//! 4. **Aggregate** ([`aggregate`]): parse each measurement, drop the ones
//!    that do not parse, rank the rest by lines of code.
//! 5. **Persist** ([`persist`]): upsert the records into the library and
//!    write it back once.
//! 6. **Emit** ([`sink`]): write raw blocks or processed records to the
//!    output file or stdout.
//!
//! Steps 4 and 5 are skipped in raw mode. The library is only touched by the
//! calling thread, before the workers start and after they have all joined.

pub mod aggregate;
pub mod filter;
pub mod orchestrator;
pub mod persist;
pub mod sink;
pub mod worker;

use log::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::library::LibraryStore;
use crate::locator;
use crate::output::OutputConfig;
use crate::progress::Progress;
use crate::tools::ExternalTools;

/// What a worker hands back: the measurement output for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWorkerResult {
    pub raw_output: String,
    pub url: String,
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Repositories skipped because the library already had them.
    pub skipped: usize,
    /// Repositories a worker was started for.
    pub analyzed: usize,
    /// Records produced from the measurements.
    pub recorded: usize,
    /// Measurements or input entries that were reported and dropped.
    pub dropped: usize,
    /// Blocks written to the output.
    pub emitted: usize,
}

/// Executes a whole `analyze` run with the given external tools.
pub fn run(config: &RunConfig, tools: &dyn ExternalTools, output: OutputConfig) -> Result<RunSummary> {
    config.validate()?;

    let mut library = config.library.as_ref().map(LibraryStore::open).transpose()?;
    let descriptors = locator::read_input(&config.input, config.input_mode)?;
    let work = filter::select(descriptors, library.as_mut(), config.refresh)?;
    for url in &work.skipped {
        println!("Skipping {} (already in library).", url);
    }

    let progress = Progress::new(work.pending(), output);
    let outcome = orchestrator::run(work.descriptors, tools, config.jobs, &progress)?;
    progress.done();

    let mut summary = RunSummary {
        skipped: work.skipped.len(),
        analyzed: outcome.results.len(),
        dropped: outcome.rejected,
        ..RunSummary::default()
    };

    let mut out = sink::OutputSink::open(config.output.as_deref())?;
    if config.raw {
        for result in &outcome.results {
            out.emit(&sink::raw_block(result))?;
        }
        summary.emitted = outcome.results.len();
        return Ok(summary);
    }

    info!("Computing measurement data...");
    let aggregation = aggregate::aggregate(&outcome.results, &config.language);
    for dropped in &aggregation.dropped {
        progress.diagnostic(dropped);
    }
    summary.dropped += aggregation.dropped.len();
    summary.recorded = aggregation.records.len();

    if let Some(library) = library.as_mut() {
        info!("Updating library...");
        persist::merge_and_flush(library, &aggregation.records)?;
    }

    for record in &aggregation.records {
        out.emit(&sink::record_line(record)?)?;
    }
    summary.emitted = aggregation.records.len();
    Ok(summary)
}
