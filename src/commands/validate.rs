use super::Host;
use super::config::Config;
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `perf-trend.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Validates a configuration file by loading it and checking every rule set
/// that would drive an extraction run
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or parsed, or if a
/// rule set is malformed
fn validate_config_inner(config_path: Option<&Utf8PathBuf>) -> Result<()> {
    let config = Config::load(config_path)?;

    // Loading validates the configured sets; the builtin fallback is checked
    // here so `validate` vouches for exactly what `extract` would run.
    for set in config.active_rule_sets() {
        set.validate()?;
    }

    Ok(())
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    match validate_config_inner(args.config.as_ref()) {
        Ok(()) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = &args.config {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
