//! Command-line interface and orchestration for perf-trend
//!
//! This module implements the CLI commands and coordinates all the other
//! modules to perform end-to-end log extraction, aggregation, and reporting.
//! It handles argument parsing, configuration management, and the high-level
//! workflow.
//!
//! # Implementation Model
//!
//! The module is organized around three commands:
//!
//! ## Commands
//!
//! - **extract**: Discover benchmark logs under a data directory, build one
//!   dataset per rule set, optionally normalize the metric columns, compute
//!   cross-build statistics, persist the CSV outputs, and report deviations
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and rule set validity
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The extract command follows the
//! pipeline shape:
//!
//! 1. Parse arguments and load configuration
//! 2. Discover log files in file-name order
//! 3. Build one dataset per rule set, one row per log
//! 4. Optionally normalize, then summarize each dataset
//! 5. Persist the raw and statistics-bearing CSVs and render reports
//!
//! Configuration is managed through a TOML file controlling the output
//! directory, the log file-name marker, the normalization target, and
//! optional custom rule sets that replace the built-in ones.

mod common;
mod config;
mod extract;
mod host;
mod init;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use extract::{ExtractArgs, process_logs};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
