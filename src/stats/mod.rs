//! Cross-build statistics and deviation detection
//!
//! This module condenses a dataset's time series into per-column summaries:
//! mean, standard deviation, extremes, the single worst outlier, and the
//! most recent build's deviation. The last of these is the signal users
//! care about most, since it answers "did the latest build regress".
//!
//! # Implementation Model
//!
//! All statistics are computed over present values only; an absent cell is
//! excluded entirely, never treated as zero. Standard deviation uses the
//! sample (n - 1) convention throughout, which also sets the
//! one-standard-deviation flagging boundary. Columns without spread
//! (constant values, single samples) report no deviations and perform no
//! division.

mod summary;

pub use summary::{ColumnSummary, DatasetSummary, Deviation, summarize};
