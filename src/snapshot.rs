//! Measurement snapshots and analysis records.
//!
//! A [`MetricSnapshot`] is what remains of a measurement report once the
//! statistics for the language of interest have been picked out. An
//! [`AnalysisRecord`] ties a snapshot to the repository URL it was measured
//! for; it is the unit stored in the library and written to processed output.
//!
//! The measurement command reports JSON shaped like `cloc --json`:
//!
//! ```json
//! {
//!   "header": { "n_files": 12, "n_lines": 900, "elapsed_seconds": 0.1 },
//!   "Kotlin": { "nFiles": 10, "blank": 80, "comment": 40, "code": 700 },
//!   "SUM":    { "nFiles": 12, "blank": 100, "comment": 50, "code": 750 }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Totals over every file the measurement command looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "n_files")]
    pub file_count: u64,
    #[serde(rename = "n_lines")]
    pub line_count: u64,
}

/// Counts for a single language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    #[serde(rename = "nFiles")]
    pub file_count: u64,
    #[serde(rename = "comment")]
    pub comment_lines: u64,
    #[serde(rename = "code")]
    pub code_lines: u64,
}

/// The structured measurement for one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub header: Header,
    #[serde(rename = "language")]
    pub language_stats: LanguageStats,
}

impl MetricSnapshot {
    /// Extracts the snapshot for `language` from a measurement report.
    ///
    /// Fails with a human readable reason when the report is empty, is not
    /// valid JSON, has no header, or has no entry for the language.
    pub fn from_report(raw: &str, language: &str) -> std::result::Result<Self, String> {
        if raw.trim().is_empty() {
            return Err("measurement produced no output".to_string());
        }

        let mut report: Report = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        let stats = report
            .languages
            .remove(language)
            .ok_or_else(|| format!("no {} data in report", language))?;
        let language_stats: LanguageStats =
            serde_json::from_value(stats).map_err(|e| format!("bad {} entry: {}", language, e))?;

        Ok(Self {
            header: report.header,
            language_stats,
        })
    }
}

#[derive(Deserialize)]
struct Report {
    header: Header,
    #[serde(flatten)]
    languages: HashMap<String, serde_json::Value>,
}

/// One repository's analysis result, keyed by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub url: String,
    pub snapshot: MetricSnapshot,
}

impl AnalysisRecord {
    pub fn new(url: impl Into<String>, snapshot: MetricSnapshot) -> Self {
        Self {
            url: url.into(),
            snapshot,
        }
    }

    /// Parses a raw measurement report for `url` into a record.
    pub fn from_report(url: &str, raw: &str, language: &str) -> Result<Self> {
        let snapshot =
            MetricSnapshot::from_report(raw, language).map_err(|message| Error::MeasurementParse {
                url: url.to_string(),
                message,
            })?;
        Ok(Self::new(url, snapshot))
    }

    /// Lines of code in the language of interest.
    pub fn code_lines(&self) -> u64 {
        self.snapshot.language_stats.code_lines
    }
}
