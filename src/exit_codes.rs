//! Process exit codes.
//!
//! - `0`: the run completed. Individual repositories may still have failed;
//!   those are reported on stderr but do not change the exit code.
//! - `1`: general failure (unreadable input, output or library write failure).
//! - `2`: invalid combination of options. clap uses the same code for usage
//!   errors.
//! - `3`: the library file could not be statted, created, read or decoded.

pub const SUCCESS: i32 = 0;
pub const GENERAL: i32 = 1;
pub const CONFIGURATION: i32 = 2;
pub const LIBRARY: i32 = 3;
