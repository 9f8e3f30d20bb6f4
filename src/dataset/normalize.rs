use super::Dataset;
use log::warn;

/// Rescale each metric column so its maximum present value maps to `target`.
///
/// Returns a new dataset; the input is untouched. Every present value `v` in
/// a column with maximum `m` becomes `v / m * target`, so columns with
/// wildly different units share one scale. Absent cells stay absent, and a
/// column with no present values or a zero maximum is left as-is rather
/// than dividing by zero.
pub fn normalize(dataset: &Dataset, target: f64) -> Dataset {
    let mut out = dataset.clone();

    for col in 0..out.metric_names.len() {
        let Some(max) = dataset.column(col).map(|(_, value)| value).reduce(f64::max) else {
            warn!("column '{}' has no values to rescale", out.metric_names[col]);
            continue;
        };

        if max == 0.0 {
            warn!("column '{}' has a zero maximum, leaving it unscaled", out.metric_names[col]);
            continue;
        }

        for record in &mut out.records {
            if let Some(cell) = record.metrics.get_mut(col) {
                *cell = cell.map(|value| value / max * target);
            }
        }
    }

    out
}
