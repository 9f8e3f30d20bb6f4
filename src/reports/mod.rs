//! Report generation for datasets and deviation summaries
//!
//! This module renders the pipeline's results for human and machine
//! consumption.
//!
//! # Implementation Model
//!
//! Three generators are provided, each accessed through a `generate`
//! function writing to any [`core::fmt::Write`] sink:
//!
//! - **CSV**: the persisted dataset, with or without the trailing
//!   statistics block (latest deviations, averages, standard deviations,
//!   extremes). The variant without the block is the raw traceability copy.
//! - **Console**: terminal output listing the metrics that strayed beyond
//!   one standard deviation, with optional ANSI colors.
//! - **JSON**: the deviation summaries as structured data.
//!
//! The persisted CSV outputs never embed wall-clock timestamps, so two runs
//! over the same logs produce byte-identical files; the console report's
//! banner timestamp is supplied by the caller.

mod console;
mod csv;
mod json;

pub use console::generate as generate_console;
pub use csv::{generate as generate_csv, generate_with_stats as generate_csv_with_stats};
pub use json::generate as generate_json;
