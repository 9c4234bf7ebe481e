//! # Library Command Implementation
//!
//! Prints summaries of a library file:
//!
//! - **`--count`**: number of stored records
//! - **`--count-unique`**: number of distinct repository names, so forks of the
//!   same project count once
//! - **`--show-largest N`**: the N records with the most lines of code
//!
//! Without any of these options the record count is printed.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use loc_wizard::library::LibraryStore;

/// Summarize a library file
#[derive(Args, Debug)]
pub struct LibraryArgs {
    /// Library file to use (created empty if missing)
    #[arg(short, long, value_name = "PATH", env = "LOC_WIZARD_LIBRARY")]
    pub library: PathBuf,

    /// Count entries in the library (including those with the same name)
    #[arg(long)]
    pub count: bool,

    /// Count repositories in the library with different names
    #[arg(long)]
    pub count_unique: bool,

    /// Show the N largest projects
    #[arg(long, value_name = "N")]
    pub show_largest: Option<usize>,
}

/// Execute the `library` command.
pub fn execute(args: LibraryArgs) -> Result<()> {
    let mut library = LibraryStore::open(&args.library)?;
    for line in summarize(&mut library, &args)? {
        println!("{}", line);
    }
    Ok(())
}

fn summarize(library: &mut LibraryStore, args: &LibraryArgs) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let nothing_requested = !args.count && !args.count_unique && args.show_largest.is_none();

    if args.count || nothing_requested {
        lines.push(format!("Total entries: {}", library.len()?));
    }

    if args.count_unique {
        lines.push(format!("Unique entries: {}", library.count_unique_names()?));
    }

    if let Some(n) = args.show_largest {
        for record in library.largest(n)? {
            lines.push(format!("{}: {}", record.code_lines(), record.url));
        }
    }

    Ok(lines)
}
