//! # loc-wizard
//!
//! Counts the lines of code of many remote repositories in one batch and keeps
//! the results in a library file, so later batches only analyze what is new.
//!
//! ## Quick Example
//!
//! ```
//! use loc_wizard::locator::parse_lines;
//!
//! let descriptors = parse_lines("https://github.com/a/b\nnot a url\n");
//! assert_eq!(descriptors[0].url.as_deref(), Some("https://github.com/a/b"));
//! assert!(descriptors[1].error.is_some());
//! ```
//!
//! ## Core Concepts
//!
//! - **Locators (`locator`)**: turn the input file into repository descriptors.
//! - **Library (`library`)**: URL-keyed store of earlier results, loaded once
//!   and written back in full.
//! - **Snapshots (`snapshot`)**: the per-repository measurement and the record
//!   tying it to a URL.
//! - **External tools (`tools`)**: the fetch and measurement commands.
//! - **Pipeline (`pipeline`)**: filter, fan out to workers, aggregate, persist
//!   and emit.
//!
//! The fetch step defaults to `git clone --depth 1` and the measurement step to
//! `cloc --json`; both are configurable and neither is implemented here.

pub mod config;
pub mod defaults;
pub mod error;
pub mod exit_codes;
pub mod library;
pub mod locator;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod snapshot;
pub mod tools;

#[cfg(test)]
mod locator_proptest;
