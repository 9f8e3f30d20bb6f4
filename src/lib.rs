#![doc(hidden)]

//! Core library for perf-trend
//!
//! This library consolidates all functionality for the perf-trend tool, which
//! extracts benchmark results from raw log files and tracks them across a
//! sequence of builds.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`rules`]: Extraction rules and the built-in rule sets
//! - [`extract`]: Log reading, value extraction, and log discovery
//! - [`dataset`]: Per-build records, dataset assembly, and normalization
//! - [`stats`]: Cross-build statistics and deviation detection
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod dataset;
#[cfg(not(any(debug_assertions, test)))]
mod dataset;

#[cfg(any(debug_assertions, test))]
pub mod extract;
#[cfg(not(any(debug_assertions, test)))]
mod extract;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod rules;
#[cfg(not(any(debug_assertions, test)))]
mod rules;

#[cfg(any(debug_assertions, test))]
pub mod stats;
#[cfg(not(any(debug_assertions, test)))]
mod stats;

pub use crate::commands::{Host, run};
