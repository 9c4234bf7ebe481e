//! Shared test utilities for E2E tests.
//!
//! The fixture stands in for `git` and `cloc` with two small `sh` scripts:
//!
//! - `fetch.sh URL DIR` appends the URL to `fetch.log` and copies the canned
//!   report registered for that URL (if any) into `DIR/report.json`.
//! - `measure.sh [--json] DIR` prints `DIR/report.json`. Without `--json` it
//!   prints a plain-text banner first, like a raw report.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new()
//!     .with_input("https://github.com/a/b\n")
//!     .with_report("https://github.com/a/b", &reports::kotlin(42));
//! fixture.analyze().assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::reports;
    pub use super::TestFixture;
}

/// Canned measurement reports.
#[allow(dead_code)]
pub mod reports {
    /// A `cloc --json` style report with `code` Kotlin lines.
    pub fn kotlin(code: u64) -> String {
        language("Kotlin", code)
    }

    pub fn language(name: &str, code: u64) -> String {
        format!(
            r#"{{"header":{{"cloc_url":"github.com/AlDanial/cloc","n_files":4,"n_lines":{}}},"{}":{{"nFiles":3,"blank":2,"comment":5,"code":{}}},"SUM":{{"nFiles":4,"blank":2,"comment":5,"code":{}}}}}"#,
            code + 7,
            name,
            code,
            code
        )
    }

    /// A library file holding one Kotlin record per `(url, code)` pair.
    pub fn library(entries: &[(&str, u64)]) -> String {
        let records: Vec<String> = entries
            .iter()
            .map(|(url, code)| {
                format!(
                    r#"{{"url":"{}","snapshot":{{"header":{{"n_files":4,"n_lines":{}}},"language":{{"nFiles":3,"comment":5,"code":{}}}}}}}"#,
                    url,
                    code + 7,
                    code
                )
            })
            .collect();
        format!("[{}]", records.join(","))
    }
}

/// A temporary directory with an input file and stub fetch/measure scripts.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    reports: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            reports: Vec::new(),
        }
    }

    /// Write `repos.txt` with the given content.
    pub fn with_input(self, content: &str) -> Self {
        self.with_file("repos.txt", content)
    }

    /// Register the report the measurement stub prints for `url`.
    pub fn with_report(mut self, url: &str, report: &str) -> Self {
        self.reports.push((url.to_string(), report.to_string()));
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    pub fn input_path(&self) -> PathBuf {
        self.path().join("repos.txt")
    }

    pub fn library_path(&self) -> PathBuf {
        self.path().join("library.json")
    }

    /// URLs the fetch stub was invoked with, in invocation order.
    pub fn fetched(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("fetch.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn write_scripts(&self) {
        let reports_dir = self.child("reports");
        reports_dir.create_dir_all().expect("Failed to create reports dir");

        let mut fetch = String::from("#!/bin/sh\n");
        fetch.push_str(&format!(
            "printf '%s\\n' \"$1\" >> '{}'\n",
            self.path().join("fetch.log").display()
        ));
        fetch.push_str("case \"$1\" in\n");
        for (i, (url, report)) in self.reports.iter().enumerate() {
            let report_path = reports_dir.path().join(format!("{}.json", i));
            std::fs::write(&report_path, report).expect("Failed to write report");
            fetch.push_str(&format!(
                "  '{}') cp '{}' \"$2/report.json\" ;;\n",
                url,
                report_path.display()
            ));
        }
        fetch.push_str("esac\nexit 0\n");

        let measure = "#!/bin/sh\n\
            for dir in \"$@\"; do :; done\n\
            if [ \"$1\" != \"--json\" ]; then echo \"raw report\"; fi\n\
            cat \"$dir/report.json\" 2>/dev/null\n\
            exit 0\n";

        std::fs::write(self.path().join("fetch.sh"), fetch).expect("Failed to write fetch.sh");
        std::fs::write(self.path().join("measure.sh"), measure)
            .expect("Failed to write measure.sh");
    }

    /// A command for the binary with no arguments.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("loc-wizard");
        cmd.current_dir(self.path())
            .env_remove("LOC_WIZARD_LIBRARY")
            .env_remove("LOC_WIZARD_FETCH_CMD")
            .env_remove("LOC_WIZARD_MEASURE_CMD")
            .env_remove("RUST_LOG");
        cmd
    }

    /// An `analyze` command reading `repos.txt` with the stub tools.
    pub fn analyze(&self) -> assert_cmd::Command {
        self.write_scripts();
        let mut cmd = self.command();
        cmd.arg("analyze")
            .arg("--input-file")
            .arg(self.input_path())
            .arg("--fetch-cmd")
            .arg("sh")
            .arg("--fetch-args")
            .arg(self.path().join("fetch.sh"))
            .arg("--measure-cmd")
            .arg("sh")
            .arg("--measure-args")
            .arg(self.path().join("measure.sh"));
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines of stdout that hold processed records.
#[allow(dead_code)]
pub fn record_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).expect("record line is JSON"))
        .collect()
}
