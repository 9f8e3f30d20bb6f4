//! Command dispatch logic for perf-trend

use super::{ExtractArgs, InitArgs, ValidateArgs, init_config, process_logs, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "perf-trend", version, about = "Track benchmark results across successive builds", author)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: PerfTrendSubcommand,
}

#[derive(Subcommand, Debug)]
enum PerfTrendSubcommand {
    /// Extract benchmark results from a directory of logs and generate datasets
    Extract(Box<ExtractArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match Cli::parse_from(args).command {
        PerfTrendSubcommand::Extract(extract_args) => process_logs(host, &extract_args),
        PerfTrendSubcommand::Init(init_args) => init_config(host, &init_args),
        PerfTrendSubcommand::Validate(validate_args) => validate_config(host, &validate_args),
    }
}
