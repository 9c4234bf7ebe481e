//! Output Sink: where raw blocks and processed records end up.
//!
//! With an output path, whatever was at that path is deleted first and each
//! block is appended, followed by a newline. Without one, blocks are printed
//! to stdout.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::RawWorkerResult;
use crate::error::Result;
use crate::snapshot::AnalysisRecord;

/// Destination for emitted blocks.
#[derive(Debug)]
pub enum OutputSink {
    Stdout,
    File(File),
}

impl OutputSink {
    /// Opens the sink, discarding any previous content at `path`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout);
        };

        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::File(file))
    }

    /// Writes one block.
    pub fn emit(&mut self, block: &str) -> Result<()> {
        match self {
            Self::Stdout => println!("{}", block),
            Self::File(file) => writeln!(file, "{}", block)?,
        }
        Ok(())
    }
}

/// A raw measurement with its URL banner.
pub fn raw_block(result: &RawWorkerResult) -> String {
    format!("######## {} ########\n{}", result.url, result.raw_output)
}

/// A record as one line of JSON.
pub fn record_line(record: &AnalysisRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}
