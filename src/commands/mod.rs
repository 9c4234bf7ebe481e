//! # CLI Command Implementations
//!
//! Each subcommand lives in its own file with an `Args` struct derived with
//! `clap` and an `execute` function that calls into the `loc_wizard` library.

pub mod analyze;
pub mod completions;
pub mod library;
