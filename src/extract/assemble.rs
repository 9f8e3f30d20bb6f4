use super::{LogDocument, extract, parse_build_info};
use crate::Result;
use crate::dataset::BuildRecord;
use crate::rules::RuleSet;
use camino::Utf8Path;
use log::warn;

/// Produce one dataset row from one benchmark log.
///
/// Every rule in `rules` is tried in order; a failed extraction is logged
/// and recorded as an absent cell without affecting the rest of the row.
/// `build_index` is the record's position in processing order, assigned by
/// the caller.
///
/// # Errors
///
/// Returns an error only if the log file itself cannot be read.
pub fn assemble(path: &Utf8Path, rules: &RuleSet, build_index: usize) -> Result<BuildRecord> {
    let doc = LogDocument::read(path)?;
    let info = parse_build_info(path.file_name().unwrap_or_default());

    let metrics = rules
        .rules
        .iter()
        .map(|rule| match extract(&doc, rule) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("extracting '{}' from '{path}': {err}", rule.metric);
                None
            }
        })
        .collect();

    Ok(BuildRecord { build_index, info, metrics })
}
