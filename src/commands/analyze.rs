//! Analyze command implementation
//!
//! Reads the repository list, skips what the library already has, clones and
//! measures the rest in parallel, then writes the results and updates the
//! library.

use anyhow::Result;
use clap::Args;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use loc_wizard::config::RunConfig;
use loc_wizard::defaults;
use loc_wizard::locator::InputMode;
use loc_wizard::output::OutputConfig;
use loc_wizard::pipeline;
use loc_wizard::tools::{ArgList, CommandSpec};

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File containing the repositories to analyze (one URL per line)
    #[arg(short, long, value_name = "PATH")]
    pub input_file: PathBuf,

    /// File to write results to (replaced if it exists); stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Library file: skip repositories already in it and store new results
    #[arg(short, long, value_name = "PATH", env = "LOC_WIZARD_LIBRARY")]
    pub library: Option<PathBuf>,

    /// Analyze every repository again, even those already in the library
    #[arg(long)]
    pub refresh_library: bool,

    /// The command used to fetch a repository
    #[arg(short = 'G', long, value_name = "CMD", env = "LOC_WIZARD_FETCH_CMD", default_value = defaults::FETCH_CMD)]
    pub fetch_cmd: String,

    /// Arguments for the fetch command, placed before the URL and target directory
    #[arg(short = 'g', long, value_name = "ARGS", default_value = defaults::FETCH_ARGS, allow_hyphen_values = true)]
    pub fetch_args: ArgList,

    /// The command used to count lines of code
    #[arg(short = 'C', long, value_name = "CMD", env = "LOC_WIZARD_MEASURE_CMD", default_value = defaults::MEASURE_CMD)]
    pub measure_cmd: String,

    /// Arguments for the measurement command, placed before the directory
    #[arg(short = 'c', long, value_name = "ARGS", allow_hyphen_values = true)]
    pub measure_args: Option<ArgList>,

    /// Language whose line counts are recorded
    #[arg(long, value_name = "NAME", default_value = defaults::LANGUAGE)]
    pub language: String,

    /// Write the measurement output unprocessed (cannot be combined with --library)
    #[arg(short, long)]
    pub raw: bool,

    /// Read the input file as a JSON feed of repository names (seart-ghs export)
    #[arg(long)]
    pub feed: bool,

    /// Number of repositories analyzed at the same time
    #[arg(short, long, value_name = "N", default_value_t = defaults::JOBS)]
    pub jobs: usize,
}

impl AnalyzeArgs {
    fn into_config(self) -> RunConfig {
        RunConfig {
            input: self.input_file,
            input_mode: if self.feed {
                InputMode::Feed
            } else {
                InputMode::Lines
            },
            output: self.output_file,
            library: self.library,
            refresh: self.refresh_library,
            fetch: CommandSpec::new(self.fetch_cmd, self.fetch_args),
            measure: CommandSpec::new(self.measure_cmd, self.measure_args.unwrap_or_default()),
            language: self.language,
            raw: self.raw,
            jobs: self.jobs,
        }
    }
}

/// Execute the analyze command
pub fn execute(args: AnalyzeArgs, output: OutputConfig) -> Result<()> {
    let start_time = Instant::now();
    let config = args.into_config();
    let tools = config.system_tools();

    let summary = pipeline::run(&config, &tools, output)?;

    info!(
        "Finished in {:.2}s: {} analyzed, {} skipped, {} recorded, {} dropped",
        start_time.elapsed().as_secs_f64(),
        summary.analyzed,
        summary.skipped,
        summary.recorded,
        summary.dropped
    );
    Ok(())
}
