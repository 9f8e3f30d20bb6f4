use super::Host;
use super::common::{self, CommonArgs};
use super::config::Config;
use crate::extract::find_log_files;
use crate::reports::{generate_console, generate_csv, generate_csv_with_stats, generate_json};
use crate::stats::{DatasetSummary, summarize};
use crate::{Result, dataset};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use clap::Parser;
use log::info;
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Directory scanned recursively for benchmark logs
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Utf8PathBuf,

    /// Directory where the CSV datasets are written (overrides the configuration)
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Rescale each metric column so its maximum equals the configured target
    #[arg(long)]
    pub normalize: bool,

    /// Write the deviation report to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Run the extraction pipeline: discover logs, build one dataset per rule
/// set, summarize it, persist the CSV outputs, and report deviations.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, no logs are found, a
/// log cannot be read, or an output file cannot be written. Extraction
/// failures inside a log are not errors; they become absent cells.
pub fn process_logs<H: Host>(host: &mut H, args: &ExtractArgs) -> Result<()> {
    common::init_logging(args.common.log_level);

    let config = Config::load(args.common.config.as_ref())?;
    let output_dir = args.output_dir.as_ref().unwrap_or(&config.output_dir);

    let paths = find_log_files(&args.data_dir, &config.file_marker)?;
    if paths.is_empty() {
        bail!("no benchmark logs matching '{}' found under '{}'", config.file_marker, args.data_dir);
    }
    info!("processing {} benchmark logs from '{}'", paths.len(), args.data_dir);

    fs::create_dir_all(output_dir).into_app_err_with(|| format!("creating output directory '{output_dir}'"))?;

    let mut summaries = Vec::new();
    for rules in config.active_rule_sets() {
        let mut built = dataset::build(&paths, &rules)?;
        if args.normalize {
            built = dataset::normalize(&built, config.normalize_to);
        }

        let summary = summarize(&built);
        persist_dataset(&built, &summary, output_dir)?;
        summaries.push(summary);
    }

    let mut console_output = String::new();
    generate_console(&summaries, Local::now(), common::use_colors(args.common.color), &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&summaries, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report '{filename}'"))?;
    }

    Ok(())
}

/// Write the two CSV files for one dataset: the raw traceability copy and
/// the full file with the trailing statistics block.
fn persist_dataset(built: &dataset::Dataset, summary: &DatasetSummary, output_dir: &Utf8Path) -> Result<()> {
    let raw_path = output_dir.join(format!("{}_raw.csv", built.name));
    let mut raw_output = String::new();
    generate_csv(built, &mut raw_output)?;
    fs::write(&raw_path, &raw_output).into_app_err_with(|| format!("writing dataset '{raw_path}'"))?;
    info!("wrote '{raw_path}'");

    let full_path = output_dir.join(format!("{}.csv", built.name));
    let mut full_output = String::new();
    generate_csv_with_stats(built, summary, &mut full_output)?;
    fs::write(&full_path, &full_output).into_app_err_with(|| format!("writing dataset '{full_path}'"))?;
    info!("wrote '{full_path}'");

    Ok(())
}
