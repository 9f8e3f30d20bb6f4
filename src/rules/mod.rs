//! Extraction rules and rule sets
//!
//! A rule describes where one benchmark result lives inside an unstructured
//! log: the anchor text that locates the benchmark's section, a signed line
//! offset from the last anchor occurrence, and the two delimiter strings
//! around the numeric value on the target line.
//!
//! # Implementation Model
//!
//! Rules are grouped into [`RuleSet`]s; rule order within a set is the column
//! order of the generated dataset, and the set name is the output file stem.
//! Two built-in sets cover the standard perf benchmark suite and the
//! find-bit parameter sweep (see [`builtin`]); custom sets can be supplied
//! through the configuration file, where both types deserialize directly.
//!
//! Rule sets are built once at startup and read-only afterwards.

mod builtin;

pub use builtin::{builtin_rule_sets, find_bit_rules, perf_bench_rules};

use crate::Result;
use ohno::app_err;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where to find one benchmark result inside a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionRule {
    /// Column header for this rule's values; defaults to `anchor`.
    #[serde(default)]
    pub metric: String,

    /// Literal text identifying the benchmark's section in the log.
    pub anchor: String,

    /// Signed line offset from the last line containing `anchor`.
    #[serde(default)]
    pub offset: i64,

    /// Text immediately before the value on the target line.
    pub left_bound: String,

    /// Text after the value on the target line.
    pub right_bound: String,
}

impl ExtractionRule {
    pub fn new(metric: &str, anchor: &str, offset: i64, left_bound: &str, right_bound: &str) -> Self {
        Self {
            metric: metric.to_string(),
            anchor: anchor.to_string(),
            offset,
            left_bound: left_bound.to_string(),
            right_bound: right_bound.to_string(),
        }
    }

    /// A rule whose column header is the anchor text itself, which is how
    /// the built-in sets name their columns.
    pub fn anchored(anchor: &str, offset: i64, left_bound: &str, right_bound: &str) -> Self {
        Self::new(anchor, anchor, offset, left_bound, right_bound)
    }
}

/// An ordered, named collection of extraction rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    /// Name of the set; used as the output file stem.
    pub name: String,

    #[serde(default, rename = "rule")]
    pub rules: Vec<ExtractionRule>,
}

impl RuleSet {
    pub fn new(name: &str, rules: Vec<ExtractionRule>) -> Self {
        Self { name: name.to_string(), rules }
    }

    /// Column headers, in rule order.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.metric.as_str())
    }

    /// Fill empty metric names from the anchor text. Configuration files may
    /// omit `metric` for rules named after their anchor.
    pub fn resolve_metric_names(&mut self) {
        for rule in &mut self.rules {
            if rule.metric.is_empty() {
                rule.metric = rule.anchor.clone();
            }
        }
    }

    /// Check that the set can produce a well-formed dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the set is unnamed or empty, or if a metric name
    /// is empty or appears more than once.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(app_err!("rule set has an empty name"));
        }

        if self.rules.is_empty() {
            return Err(app_err!("rule set '{}' has no rules", self.name));
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.metric.is_empty() {
                return Err(app_err!("rule set '{}' has a rule with neither a metric name nor an anchor", self.name));
            }

            if !seen.insert(rule.metric.as_str()) {
                return Err(app_err!("rule set '{}' defines metric '{}' more than once", self.name, rule.metric));
            }
        }

        Ok(())
    }
}
