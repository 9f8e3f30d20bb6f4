//! Log reading and value extraction
//!
//! This module turns one raw benchmark log into one row of measurements. It
//! reads a log into an immutable [`LogDocument`], locates each configured
//! value with the anchored-text pipeline in [`extractor`], parses build
//! metadata out of the log's file name, and discovers log files on disk.
//!
//! # Implementation Model
//!
//! Extraction is a four-stage pipeline with early exit: find the last line
//! containing the rule's anchor, resolve the offset target line, locate the
//! two delimiters, parse the text between them as a number. Each stage has
//! its own [`ExtractError`] variant, so every way an extraction can fail is
//! observable and testable in isolation.
//!
//! Every failure is contained to a single (log, rule) cell: the assembler
//! logs a diagnostic naming the metric and records an absent value, and the
//! rest of the row is unaffected. Nothing in this module aborts a run except
//! failing to read a log file or the data directory itself.

mod assemble;
mod build_info;
mod extractor;
mod log_document;
mod scan;

pub use assemble::assemble;
pub use build_info::{BuildInfo, parse_build_info};
pub use extractor::{ExtractError, extract};
pub use log_document::LogDocument;
pub use scan::find_log_files;
