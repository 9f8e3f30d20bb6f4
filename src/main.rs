//! A tool to track benchmark results across successive builds.
//!
//! # Overview
//!
//! `perf-trend` turns a directory of raw benchmark logs (one per build) into
//! tabular CSV datasets and flags measurements that drift away from their
//! cross-build mean. It is used to spot performance regressions between
//! successive firmware and kernel builds, where file timestamps are
//! unreliable and the only stable ordering is the log file name.
//!
//! # Quick Start
//!
//! Extract every recognized benchmark result under a data directory:
//!
//! ```bash
//! perf-trend extract ../perf_data/SD
//! ```
//!
//! This scans the directory recursively for files whose name contains
//! `perf_results`, processes them in file-name order, and writes one CSV
//! dataset per rule set into the current directory:
//!
//! - `perf_results.csv` / `perf_find_bit_results.csv` — dataset plus a
//!   trailing statistics block (averages, standard deviations, extremes,
//!   and the latest build's deviations);
//! - `perf_results_raw.csv` / `perf_find_bit_results_raw.csv` — the same
//!   rows without the statistics block, kept for traceability.
//!
//! A console report lists every metric whose values stray more than one
//! standard deviation from the column mean, with the most recent build's
//! deviation called out separately.
//!
//! # Common Flags
//!
//! ```bash
//! perf-trend extract DATA_DIR --output-dir out      # where CSVs land
//! perf-trend extract DATA_DIR --normalize           # rescale columns first
//! perf-trend extract DATA_DIR --json report.json    # deviation report as JSON
//! perf-trend extract DATA_DIR --log-level info      # extraction diagnostics
//! ```
//!
//! Failed extractions are never fatal: a benchmark missing from one log
//! produces an empty cell in that row and a diagnostic on stderr, so "no
//! regression" and "failed to measure" stay distinguishable.
//!
//! # Configuration
//!
//! Generate a commented default configuration with:
//!
//! ```bash
//! perf-trend init
//! ```
//!
//! The file (`perf-trend.toml` by default, `--config` to override) controls
//! the output directory, the log file-name marker, the normalization target,
//! and optional custom rule sets that replace the built-in ones:
//!
//! ```toml
//! [[rule_set]]
//! name = "custom_results"
//!
//! [[rule_set.rule]]
//! anchor = "sched/pipe"
//! offset = 5
//! left_bound = " "
//! right_bound = "usecs/op"
//! ```
//!
//! Check a configuration without running an extraction:
//!
//! ```bash
//! perf-trend validate --config perf-trend.toml
//! ```

use perf_trend::{Host, run};
use std::io::{Write, stderr, stdout};

/// Default host that writes to the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
