//! Operator-facing progress reporting.
//!
//! Workers call [`Progress::start`] and [`Progress::finish`] from whatever
//! thread they run on. Each call takes the next number from its own atomic
//! counter, so start numbers and finish numbers are each unique and gapless,
//! but the two sequences are unrelated: repository #3 may well be the first
//! one done.
//!
//! Progress lines go to stdout, diagnostics to stderr. When decoration is on
//! a bar on stderr tracks finished workers, and lines are printed with the
//! bar suspended.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::output::OutputConfig;

/// Start/finish accounting for one batch.
pub struct Progress {
    total: usize,
    started: AtomicUsize,
    finished: AtomicUsize,
    bar: ProgressBar,
    output: OutputConfig,
}

impl Progress {
    pub fn new(total: usize, output: OutputConfig) -> Self {
        let bar = if output.decorate {
            let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} repositories") {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            total,
            started: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            bar,
            output,
        }
    }

    /// Records that a worker started on `url`; returns its start number.
    pub fn start(&self, url: &str, workspace: &Path) -> usize {
        let position = self.started.fetch_add(1, Ordering::Relaxed) + 1;
        self.line(format!(
            "{} Analyzing {}/{}: {} (in {})...",
            self.output.marker("🔍", "[..]"),
            position,
            self.total,
            url,
            workspace.display()
        ));
        position
    }

    /// Records that the worker with start number `position` is done.
    pub fn finish(&self, url: &str, position: usize) -> usize {
        let done = self.finished.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.inc(1);
        self.line(format!(
            "{} Done {}/{} [#{}]: {}",
            self.output.marker("✅", "[OK]"),
            done,
            self.total,
            position,
            url
        ));
        done
    }

    /// Workers that have started so far.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::Relaxed)
    }

    /// Workers that have finished so far.
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::Relaxed)
    }

    /// Prints a status line on stdout.
    pub fn line(&self, text: String) {
        self.bar.suspend(|| println!("{}", text));
    }

    /// Prints a per-item diagnostic on stderr.
    pub fn diagnostic(&self, text: impl std::fmt::Display) {
        self.bar.suspend(|| eprintln!("Error: {}", text));
    }

    /// Removes the bar once every worker has joined.
    pub fn done(&self) {
        self.bar.finish_and_clear();
    }
}
