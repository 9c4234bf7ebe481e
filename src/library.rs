//! # Library Store
//!
//! The library is a JSON file holding every [`AnalysisRecord`] produced by
//! earlier runs. It lets a batch skip repositories that were already measured
//! and collects results across runs.
//!
//! ## Lifecycle
//!
//! 1. [`LibraryStore::open`] makes sure the file exists, creating it with an
//!    empty array if needed. It does not read the contents.
//! 2. The first call that needs the records reads and decodes the file once
//!    and keys the records by URL. Later duplicates of a URL replace earlier
//!    ones, so the store never holds two records for the same repository.
//! 3. [`LibraryStore::upsert`] changes the in-memory copy only.
//! 4. [`LibraryStore::flush`] rewrites the whole file from the in-memory copy.
//!    The new content goes to a temporary file next to the library which is
//!    then renamed over it.
//!
//! The store is owned by a single thread. There is no locking against other
//! processes writing the same file: the last flush wins.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::snapshot::AnalysisRecord;

/// Persistent, URL-keyed cache of analysis records.
#[derive(Debug)]
pub struct LibraryStore {
    path: PathBuf,
    records: Option<BTreeMap<String, AnalysisRecord>>,
}

impl LibraryStore {
    /// Opens the library at `path`, creating an empty one if it is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let exists = path.try_exists().map_err(|e| library_error(&path, e))?;
        if !exists {
            debug!("Creating empty library at {}", path.display());
            fs::write(&path, "[]").map_err(|e| library_error(&path, e))?;
        }
        Ok(Self {
            path,
            records: None,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn records(&mut self) -> Result<&mut BTreeMap<String, AnalysisRecord>> {
        if self.records.is_none() {
            let loaded = self.load()?;
            self.records = Some(loaded);
        }
        // Populated just above.
        Ok(self.records.get_or_insert_with(BTreeMap::new))
    }

    fn load(&self) -> Result<BTreeMap<String, AnalysisRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| library_error(&self.path, e))?;
        let stored: Vec<AnalysisRecord> =
            serde_json::from_str(&content).map_err(|e| library_error(&self.path, e))?;
        debug!("Loaded {} records from {}", stored.len(), self.path.display());

        Ok(stored
            .into_iter()
            .map(|record| (record.url.clone(), record))
            .collect())
    }

    /// Whether a record for `url` is stored.
    pub fn contains(&mut self, url: &str) -> Result<bool> {
        Ok(self.records()?.contains_key(url))
    }

    /// The stored record for `url`, if any.
    pub fn get(&mut self, url: &str) -> Result<Option<AnalysisRecord>> {
        Ok(self.records()?.get(url).cloned())
    }

    /// Inserts `record`, replacing any record with the same URL.
    pub fn upsert(&mut self, record: AnalysisRecord) -> Result<()> {
        self.records()?.insert(record.url.clone(), record);
        Ok(())
    }

    /// All stored records, ordered by URL.
    pub fn values(&mut self) -> Result<Vec<AnalysisRecord>> {
        Ok(self.records()?.values().cloned().collect())
    }

    /// Number of stored records.
    pub fn len(&mut self) -> Result<usize> {
        Ok(self.records()?.len())
    }

    /// Whether the library holds no records.
    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.records()?.is_empty())
    }

    /// Overwrites the backing file with the current set of records.
    pub fn flush(&mut self) -> Result<()> {
        let values = self.values()?;
        let json = serde_json::to_string_pretty(&values)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!("Wrote {} records to {}", values.len(), self.path.display());
        Ok(())
    }

    /// Number of distinct repository names across stored URLs.
    ///
    /// Forks and mirrors of the same project on different owners count once.
    pub fn count_unique_names(&mut self) -> Result<usize> {
        let names: HashSet<Option<String>> = self
            .records()?
            .keys()
            .map(|url| repository_name(url).map(str::to_string))
            .collect();
        Ok(names.len())
    }

    /// The `n` records with the most lines of code, largest first.
    pub fn largest(&mut self, n: usize) -> Result<Vec<AnalysisRecord>> {
        let mut values = self.values()?;
        values.sort_by(|a, b| b.code_lines().cmp(&a.code_lines()));
        values.truncate(n);
        Ok(values)
    }
}

fn library_error(path: &Path, e: impl std::fmt::Display) -> Error {
    Error::Library {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Extracts the repository name from a `host/owner/name` style URL.
pub fn repository_name(url: &str) -> Option<&str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^(?:https?://)?[^/:]+/[^/]+/(?P<name>.*)$").expect("name pattern is valid")
    });
    pattern
        .captures(url)
        .and_then(|captures| captures.name("name"))
        .map(|name| name.as_str())
}
