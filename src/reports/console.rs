use crate::Result;
use crate::stats::{ColumnSummary, DatasetSummary};
use chrono::{DateTime, Local};
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Render the deviation report for the terminal.
///
/// One section per dataset, listing every metric with a measurement further
/// than one standard deviation from its cross-build mean. The most recent
/// build's deviation is called out separately since it is the signal that a
/// regression just landed.
pub fn generate<W: Write>(summaries: &[DatasetSummary], timestamp: DateTime<Local>, use_colors: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "Deviation report generated {}", timestamp.format("%Y-%m-%d %H:%M"))?;

    for summary in summaries {
        writeln!(writer)?;
        if use_colors {
            writeln!(writer, "{}", summary.dataset.bold())?;
        } else {
            writeln!(writer, "{}", summary.dataset)?;
        }

        let flagged: Vec<&ColumnSummary> = summary.columns.iter().flatten().filter(|column| column.worst.is_some()).collect();

        if flagged.is_empty() {
            writeln!(writer, "  all metrics within one standard deviation of their mean")?;
            continue;
        }

        let max_name_len = flagged.iter().map(|column| column.metric.len()).max().unwrap_or(0);

        for column in flagged {
            let Some(worst) = column.worst else {
                continue;
            };

            write!(
                writer,
                "  {:<width$} : build {} is {:.2} std devs from the mean ({} vs {:.3})",
                column.metric,
                worst.row,
                worst.magnitude,
                worst.value,
                column.mean,
                width = max_name_len
            )?;

            if let Some(latest) = column.latest {
                let tag = format!("latest build {latest:+.2} std devs");
                if use_colors {
                    write!(writer, "; {}", tag.red().bold())?;
                } else {
                    write!(writer, "; {tag}")?;
                }
            }

            writeln!(writer)?;
        }
    }

    Ok(())
}
