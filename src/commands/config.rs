use crate::Result;
use crate::rules::{RuleSet, builtin_rule_sets};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Configuration file name looked up in the current directory when no
/// explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "perf-trend.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory where the generated CSV datasets are written
    #[serde(default = "default_output_dir")]
    pub output_dir: Utf8PathBuf,

    /// Substring that marks a file as a benchmark log during directory scans
    #[serde(default = "default_file_marker")]
    pub file_marker: String,

    /// Column maximum used when metric values are rescaled
    #[serde(default = "default_normalize_to")]
    pub normalize_to: f64,

    /// Custom rule sets; when empty, the built-in rule sets are used
    #[serde(default, rename = "rule_set")]
    pub rule_sets: Vec<RuleSet>,
}

fn default_output_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(".")
}

fn default_file_marker() -> String {
    "perf_results".to_string()
}

const fn default_normalize_to() -> f64 {
    100.0
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// When no path is given, `perf-trend.toml` in the current directory is
    /// tried; its absence means the defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading perf-trend configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = Utf8PathBuf::from(DEFAULT_CONFIG_PATH);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading perf-trend configuration file '{path}'")),
            }
        };

        let mut config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        for set in &mut config.rule_sets {
            set.resolve_metric_names();
        }
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// The rule sets the pipeline runs with: the configured ones, or the
    /// built-in pair when the configuration defines none.
    pub fn active_rule_sets(&self) -> Vec<RuleSet> {
        if self.rule_sets.is_empty() {
            builtin_rule_sets()
        } else {
            self.rule_sets.clone()
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the normalization target is not a positive finite
    /// number, the file marker is empty, or a rule set is malformed
    fn validate(&self) -> Result<()> {
        if !self.normalize_to.is_finite() || self.normalize_to <= 0.0 {
            return Err(app_err!("normalize_to must be a positive number, got {}", self.normalize_to));
        }

        if self.file_marker.is_empty() {
            return Err(app_err!("file_marker must not be empty, every file would match"));
        }

        let mut seen = HashSet::new();
        for set in &self.rule_sets {
            set.validate()?;
            if !seen.insert(set.name.as_str()) {
                return Err(app_err!("rule set '{}' is defined more than once", set.name));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
