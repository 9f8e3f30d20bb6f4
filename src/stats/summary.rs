use crate::dataset::Dataset;
use serde::Serialize;

/// One measurement further than one standard deviation from its column mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    /// 0-based build index of the deviating row.
    pub row: usize,

    pub value: f64,

    /// Distance from the column mean, in standard deviations; unsigned.
    pub magnitude: f64,
}

/// Statistics for one metric column, over its present values only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub metric: String,

    /// Number of present values the statistics are computed over.
    pub samples: usize,

    pub mean: f64,

    /// Sample (n - 1) standard deviation; zero for single-sample columns.
    pub std_dev: f64,

    pub min: f64,

    pub max: f64,

    /// The largest deviation beyond one std dev, if any. Ties keep the
    /// earliest row.
    pub worst: Option<Deviation>,

    /// Signed deviation of the most recent build, in std devs, when it
    /// exceeds one std dev.
    pub latest: Option<f64>,
}

/// Per-column summaries for one dataset, aligned with its metric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub dataset: String,

    /// One entry per metric column; `None` for columns with no present
    /// values.
    pub columns: Vec<Option<ColumnSummary>>,
}

/// Summarize every metric column of `dataset`.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let columns = (0..dataset.metric_names.len()).map(|col| summarize_column(dataset, col)).collect();

    DatasetSummary {
        dataset: dataset.name.clone(),
        columns,
    }
}

fn summarize_column(dataset: &Dataset, col: usize) -> Option<ColumnSummary> {
    let present: Vec<(usize, f64)> = dataset.column(col).collect();
    if present.is_empty() {
        return None;
    }

    let count = present.len();
    let mean = present.iter().map(|&(_, value)| value).sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = present.iter().map(|&(_, value)| (value - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    };
    let min = present.iter().map(|&(_, value)| value).fold(f64::INFINITY, f64::min);
    let max = present.iter().map(|&(_, value)| value).fold(f64::NEG_INFINITY, f64::max);

    let mut worst: Option<Deviation> = None;
    let mut latest = None;

    // Columns without spread have nothing to measure against.
    if std_dev > 0.0 {
        for &(row, value) in &present {
            let distance = (value - mean).abs();
            if distance > std_dev {
                let magnitude = distance / std_dev;
                if worst.as_ref().is_none_or(|w| magnitude > w.magnitude) {
                    worst = Some(Deviation { row, value, magnitude });
                }
            }
        }

        let newest = dataset.records.len() - 1;
        if let Some(&(row, value)) = present.last()
            && row == newest
            && (value - mean).abs() > std_dev
        {
            latest = Some((value - mean) / std_dev);
        }
    }

    Some(ColumnSummary {
        metric: dataset.metric_names[col].clone(),
        samples: count,
        mean,
        std_dev,
        min,
        max,
        worst,
        latest,
    })
}
