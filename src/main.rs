//! # loc-wizard CLI
//!
//! Binary entry point. Parses the command line with `clap`, runs the selected
//! command and turns a fatal error into its exit code.
//!
//! The core logic lives in the `loc_wizard` library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use clap::Parser;
use loc_wizard::error::Error;
use loc_wizard::exit_codes;

fn main() {
    let cli = cli::Cli::parse();
    let code = match cli.execute() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.downcast_ref::<Error>()
                .map(Error::exit_code)
                .unwrap_or(exit_codes::GENERAL)
        }
    };
    std::process::exit(code);
}
