//! Per-build records and dataset assembly
//!
//! A dataset is the tabular form of one rule set applied to an ordered
//! sequence of logs: a header of fixed build-info columns followed by one
//! metric column per rule, and one [`BuildRecord`] row per processed log.
//!
//! # Implementation Model
//!
//! [`build`] walks the caller-supplied paths strictly in order and assigns
//! each record its 0-based `build_index`. The index is the position in
//! processing order, never derived from file content, and is the stable
//! sort key for all downstream time-series logic. Rows are never reordered
//! or deduplicated, so building twice from the same path list yields
//! identical datasets.
//!
//! Every row carries exactly one cell per metric column; a measurement that
//! could not be extracted is an explicit `None`, not a missing or zeroed
//! cell. [`normalize`] produces a rescaled copy of a dataset for visual
//! comparison of columns with heterogeneous units.

mod normalize;

pub use normalize::normalize;

use crate::Result;
use crate::extract::{BuildInfo, assemble};
use crate::rules::RuleSet;
use camino::Utf8PathBuf;

/// Fixed build-info columns preceding the metric columns in every dataset.
pub const INFO_COLUMNS: [&str; 5] = ["index", "build_machine", "build_id", "boot_src", "build_date"];

/// One row of a dataset: one build's metadata and measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRecord {
    /// 0-based position in processing order.
    pub build_index: usize,

    pub info: BuildInfo,

    /// One cell per rule, in rule order; `None` marks a failed extraction.
    pub metrics: Vec<Option<f64>>,
}

/// Header plus rows for one rule set, in processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// The rule set name; used as the output file stem.
    pub name: String,

    pub metric_names: Vec<String>,

    pub records: Vec<BuildRecord>,
}

impl Dataset {
    /// Present values of one metric column, with their row indices.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(move |(row, record)| record.metrics.get(col).copied().flatten().map(|value| (row, value)))
    }
}

/// Build a dataset by processing `paths` strictly in the given order.
///
/// Callers are responsible for any ordering of `paths`; this function adds
/// none of its own.
///
/// # Errors
///
/// Returns an error if a log file cannot be read.
pub fn build(paths: &[Utf8PathBuf], rules: &RuleSet) -> Result<Dataset> {
    let mut records = Vec::with_capacity(paths.len());
    for (build_index, path) in paths.iter().enumerate() {
        records.push(assemble(path, rules, build_index)?);
    }

    Ok(Dataset {
        name: rules.name.clone(),
        metric_names: rules.metric_names().map(str::to_string).collect(),
        records,
    })
}
