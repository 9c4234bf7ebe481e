//! Default values for loc-wizard options.
//!
//! Centralized here so the CLI help text, the library API and the tests agree.

/// Program used to fetch a repository.
pub const FETCH_CMD: &str = "git";

/// Arguments placed before the URL and workspace when fetching.
pub const FETCH_ARGS: &str = "clone --depth 1";

/// Program used to count lines of code.
pub const MEASURE_CMD: &str = "cloc";

/// Arguments placed before the workspace when measuring.
pub const MEASURE_ARGS: &str = "";

/// Language whose statistics end up in a snapshot.
pub const LANGUAGE: &str = "Kotlin";

/// Number of repositories analyzed at the same time.
pub const JOBS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ArgList;

    #[test]
    fn test_default_fetch_args_are_a_shallow_clone() {
        let args: ArgList = FETCH_ARGS.parse().unwrap();
        assert_eq!(args.0, vec!["clone", "--depth", "1"]);
    }

    #[test]
    fn test_default_measure_args_are_empty() {
        let args: ArgList = MEASURE_ARGS.parse().unwrap();
        assert!(args.0.is_empty());
    }
}
