use crate::Result;
use crate::stats::DatasetSummary;
use core::fmt::Write;
use serde_json::json;

/// Render the deviation report as pretty-printed JSON, one entry per
/// dataset, for downstream tooling.
pub fn generate<W: Write>(summaries: &[DatasetSummary], writer: &mut W) -> Result<()> {
    let output = json!({ "datasets": summaries });
    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
