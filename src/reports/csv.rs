use crate::Result;
use crate::dataset::{Dataset, INFO_COLUMNS};
use crate::stats::{ColumnSummary, DatasetSummary};
use core::fmt::Write;
use std::borrow::Cow;
use strum::{EnumIter, IntoEnumIterator};

/// Rows of the statistics block appended after the dataset rows, in file
/// order. Each carries a text label in the last build-info column slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
enum StatRow {
    Latest,
    Average,
    StdDev,
    Separator,
    Max,
    Min,
}

impl StatRow {
    const fn label(self) -> &'static str {
        match self {
            Self::Latest => "latest deviation",
            Self::Average => "average",
            Self::StdDev => "std dev",
            Self::Separator => "",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    fn cell(self, summary: Option<&ColumnSummary>) -> Option<f64> {
        let summary = summary?;
        match self {
            Self::Latest => summary.latest,
            Self::Average => Some(summary.mean),
            Self::StdDev => Some(summary.std_dev),
            Self::Separator => None,
            Self::Max => Some(summary.max),
            Self::Min => Some(summary.min),
        }
    }
}

/// Render a dataset as CSV: the header row followed by one row per build in
/// processing order. Absent measurements become empty cells, never zeros.
pub fn generate<W: Write>(dataset: &Dataset, writer: &mut W) -> Result<()> {
    write!(writer, "{}", INFO_COLUMNS.join(","))?;
    for name in &dataset.metric_names {
        write!(writer, ",{}", escape_csv(name))?;
    }
    writeln!(writer)?;

    for record in &dataset.records {
        write!(
            writer,
            "{},{},{},{},{}",
            record.build_index,
            escape_csv(&record.info.build_machine),
            escape_csv(&record.info.build_id),
            escape_csv(&record.info.boot_source),
            escape_csv(&record.info.build_date)
        )?;
        for cell in &record.metrics {
            match cell {
                Some(value) => write!(writer, ",{value}")?,
                None => write!(writer, ",")?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Render a dataset as CSV followed by the trailing statistics block.
///
/// Every block row keeps the full cell count of the data rows: four empty
/// build-info cells, the row label in the fifth slot, then one cell per
/// metric column. Columns with no present values stay empty throughout, and
/// the latest-deviation row carries signed values only for columns where the
/// most recent build strayed beyond one standard deviation.
pub fn generate_with_stats<W: Write>(dataset: &Dataset, summary: &DatasetSummary, writer: &mut W) -> Result<()> {
    generate(dataset, writer)?;

    for row in StatRow::iter() {
        write!(writer, ",,,,{}", row.label())?;
        for column in &summary.columns {
            match row.cell(column.as_ref()) {
                Some(value) => write!(writer, ",{value}")?,
                None => write!(writer, ",")?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BuildRecord;
    use crate::extract::BuildInfo;
    use crate::stats::summarize;

    fn test_dataset(columns: Vec<&str>, rows: Vec<Vec<Option<f64>>>) -> Dataset {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(build_index, metrics)| BuildRecord {
                build_index,
                info: BuildInfo {
                    build_machine: format!("vm{build_index}"),
                    build_id: format!("{}", 100 + build_index),
                    boot_source: "SD".to_string(),
                    build_date: format!("2024-06-0{}", build_index + 1),
                },
                metrics,
            })
            .collect();

        Dataset {
            name: "test".to_string(),
            metric_names: columns.into_iter().map(str::to_string).collect(),
            records,
        }
    }

    #[test]
    fn test_escape_csv_no_special_chars() {
        let result = escape_csv("hello world");
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        let result = escape_csv("hello \"world\"");
        assert_eq!(result, "\"hello \"\"world\"\"\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_with_comma() {
        let result = escape_csv("hello,world");
        assert_eq!(result, "\"hello,world\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_csv_empty() {
        let result = escape_csv("");
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_generate_header_and_rows() {
        let dataset = test_dataset(vec!["RESULT"], vec![vec![Some(42.5)], vec![Some(43.0)]]);
        let mut output = String::new();
        generate(&dataset, &mut output).unwrap();

        assert_eq!(
            output,
            "index,build_machine,build_id,boot_src,build_date,RESULT\n\
             0,vm0,100,SD,2024-06-01,42.5\n\
             1,vm1,101,SD,2024-06-02,43\n"
        );
    }

    #[test]
    fn test_generate_absent_cells_are_empty() {
        let dataset = test_dataset(vec!["a", "b"], vec![vec![Some(1.0), None], vec![None, Some(2.0)]]);
        let mut output = String::new();
        generate(&dataset, &mut output).unwrap();

        assert!(output.contains("0,vm0,100,SD,2024-06-01,1,\n"));
        assert!(output.contains("1,vm1,101,SD,2024-06-02,,2\n"));
    }

    #[test]
    fn test_generate_empty_dataset_has_header_only() {
        let dataset = test_dataset(vec!["a"], vec![]);
        let mut output = String::new();
        generate(&dataset, &mut output).unwrap();
        assert_eq!(output, "index,build_machine,build_id,boot_src,build_date,a\n");
    }

    #[test]
    fn test_generate_escapes_metric_names() {
        let dataset = test_dataset(vec!["a,b"], vec![]);
        let mut output = String::new();
        generate(&dataset, &mut output).unwrap();
        assert!(output.contains(",\"a,b\"\n"));
    }

    #[test]
    fn test_stats_block_rows_and_labels() {
        // Values 10, 20, 30: mean 20, sample std 10, no value beyond one
        // std dev, so the latest-deviation row stays empty.
        let dataset = test_dataset(vec!["RESULT"], vec![vec![Some(10.0)], vec![Some(20.0)], vec![Some(30.0)]]);
        let summary = summarize(&dataset);

        let mut output = String::new();
        generate_with_stats(&dataset, &summary, &mut output).unwrap();

        let tail: Vec<&str> = output.lines().skip(4).collect();
        assert_eq!(
            tail,
            vec![
                ",,,,latest deviation,",
                ",,,,average,20",
                ",,,,std dev,10",
                ",,,,,",
                ",,,,max,30",
                ",,,,min,10",
            ]
        );
    }

    #[test]
    fn test_stats_block_rows_keep_full_cell_count() {
        let dataset = test_dataset(
            vec!["a", "b"],
            vec![vec![Some(1.0), None], vec![Some(2.0), None], vec![Some(3.0), None]],
        );
        let summary = summarize(&dataset);

        let mut output = String::new();
        generate_with_stats(&dataset, &summary, &mut output).unwrap();

        for line in output.lines() {
            assert_eq!(line.matches(',').count(), 6, "unexpected cell count in '{line}'");
        }
    }

    #[test]
    fn test_stats_block_skips_summaryless_columns() {
        let dataset = test_dataset(vec!["a", "empty"], vec![vec![Some(5.0), None], vec![Some(7.0), None]]);
        let summary = summarize(&dataset);

        let mut output = String::new();
        generate_with_stats(&dataset, &summary, &mut output).unwrap();

        assert!(output.contains(",,,,average,6,\n"));
        assert!(output.contains(",,,,max,7,\n"));
    }

    #[test]
    fn test_with_stats_starts_with_the_plain_dataset() {
        let dataset = test_dataset(vec!["RESULT"], vec![vec![Some(10.0)], vec![Some(20.0)], vec![Some(90.0)]]);
        let summary = summarize(&dataset);

        let mut raw = String::new();
        generate(&dataset, &mut raw).unwrap();

        let mut full = String::new();
        generate_with_stats(&dataset, &summary, &mut full).unwrap();

        assert!(full.starts_with(&raw));
    }

    #[test]
    fn test_latest_deviation_row_is_signed() {
        // Values 10, 20, 90: the last build strays high, so its deviation is
        // positive; flipping the series makes it negative.
        let dataset = test_dataset(vec!["RESULT"], vec![vec![Some(10.0)], vec![Some(20.0)], vec![Some(90.0)]]);
        let summary = summarize(&dataset);

        let mut output = String::new();
        generate_with_stats(&dataset, &summary, &mut output).unwrap();

        let latest_line = output.lines().find(|l| l.contains("latest deviation")).unwrap();
        let cell = latest_line.rsplit(',').next().unwrap();
        assert!(cell.parse::<f64>().unwrap() > 1.0);

        let dataset = test_dataset(vec!["RESULT"], vec![vec![Some(90.0)], vec![Some(80.0)], vec![Some(10.0)]]);
        let summary = summarize(&dataset);

        let mut output = String::new();
        generate_with_stats(&dataset, &summary, &mut output).unwrap();

        let latest_line = output.lines().find(|l| l.contains("latest deviation")).unwrap();
        let cell = latest_line.rsplit(',').next().unwrap();
        assert!(cell.parse::<f64>().unwrap() < -1.0);
    }
}
