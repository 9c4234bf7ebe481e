//! Merge & Persist: fold this run's records into the library.

use log::info;

use crate::error::Result;
use crate::library::LibraryStore;
use crate::snapshot::AnalysisRecord;

/// Upserts every record and writes the library once.
///
/// A record replaces whatever the library held for its URL. Returns the
/// number of records in the library afterwards.
pub fn merge_and_flush(library: &mut LibraryStore, records: &[AnalysisRecord]) -> Result<usize> {
    for record in records {
        library.upsert(record.clone())?;
    }
    library.flush()?;

    let total = library.len()?;
    info!(
        "Library {} now holds {} records ({} from this run)",
        library.path().display(),
        total,
        records.len()
    );
    Ok(total)
}
