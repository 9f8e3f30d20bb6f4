use super::LogDocument;
use crate::rules::ExtractionRule;
use core::fmt;

/// Why a single (log, rule) extraction produced no value.
///
/// None of these are fatal: a benchmark that did not run in a given log is a
/// normal outcome, and the caller records an absent cell instead of a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The anchor text never appears in the log.
    AnchorNotFound,

    /// The offset from the anchor line points outside the log.
    LineOutOfRange { anchor_line: usize, target: i64 },

    /// The left delimiter is missing from the target line.
    LeftBoundNotFound,

    /// The right delimiter is missing from the target line.
    RightBoundNotFound,

    /// Both delimiters are present but the right one does not follow the left.
    BoundsOutOfOrder,

    /// The text between the delimiters does not parse as a finite number.
    NotNumeric { raw: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorNotFound => write!(f, "anchor text not found in the log"),
            Self::LineOutOfRange { anchor_line, target } => {
                write!(f, "offset from anchor line {anchor_line} points at line {target}, outside the log")
            }
            Self::LeftBoundNotFound => write!(f, "left delimiter not found on the target line"),
            Self::RightBoundNotFound => write!(f, "right delimiter not found on the target line"),
            Self::BoundsOutOfOrder => write!(f, "right delimiter does not follow the left delimiter"),
            Self::NotNumeric { raw } => write!(f, "text between the delimiters is not a number: '{raw}'"),
        }
    }
}

/// Extract one numeric measurement from `doc` as described by `rule`.
///
/// The anchor scan takes the **last** matching line: benchmark tools may
/// mention a test name in preamble text well before the results section, and
/// the most recent occurrence is the authoritative one.
///
/// # Errors
///
/// Returns an [`ExtractError`] naming the pipeline stage that failed; the
/// raw text between the delimiters is never returned as a value.
pub fn extract(doc: &LogDocument, rule: &ExtractionRule) -> Result<f64, ExtractError> {
    let anchor_line = find_anchor(doc, &rule.anchor)?;
    let line = target_line(doc, anchor_line, rule.offset)?;
    let raw = slice_between(line, &rule.left_bound, &rule.right_bound)?;
    parse_numeric(raw)
}

/// Index of the last line containing `anchor` as a literal, case-sensitive
/// substring.
fn find_anchor(doc: &LogDocument, anchor: &str) -> Result<usize, ExtractError> {
    doc.lines()
        .iter()
        .rposition(|line| line.contains(anchor))
        .ok_or(ExtractError::AnchorNotFound)
}

fn target_line(doc: &LogDocument, anchor_line: usize, offset: i64) -> Result<&str, ExtractError> {
    let target = anchor_line as i64 + offset;

    usize::try_from(target)
        .ok()
        .and_then(|index| doc.lines().get(index))
        .map(String::as_str)
        .ok_or(ExtractError::LineOutOfRange { anchor_line, target })
}

/// The text strictly between the first occurrence of `left` and the first
/// occurrence of `right`; the two searches are independent of each other.
fn slice_between<'a>(line: &'a str, left: &str, right: &str) -> Result<&'a str, ExtractError> {
    let start = line.find(left).ok_or(ExtractError::LeftBoundNotFound)? + left.len();
    let end = line.find(right).ok_or(ExtractError::RightBoundNotFound)?;

    if start >= end {
        return Err(ExtractError::BoundsOutOfOrder);
    }

    line.get(start..end).ok_or(ExtractError::BoundsOutOfOrder)
}

/// Parse the delimited text as a base-10 float. The delimiters are often
/// bare spaces, so the slice regularly carries whitespace padding.
fn parse_numeric(raw: &str) -> Result<f64, ExtractError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExtractError::NotNumeric { raw: raw.to_string() }),
    }
}
