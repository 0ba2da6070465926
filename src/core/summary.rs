use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Series;
use crate::error::{ChartError, ChartResult};

/// Shape digest of a dataset, used to size scale domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    /// Unique series keys, in input order.
    pub row_keys: Vec<String>,
    /// Unique observation keys, in first-seen order across all series.
    pub column_keys: Vec<String>,
    /// Smallest finite value in the dataset.
    pub value_min: f64,
    /// Largest finite value in the dataset.
    pub value_max: f64,
}

impl DataSummary {
    /// Zero-anchored value extent used for bar heights.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        (0.0, self.value_max)
    }
}

/// Computes row keys, column keys, and the value envelope for a dataset.
///
/// Key order is first-seen, never sorted. Non-finite values are skipped
/// when folding the envelope; a dataset without a single finite value
/// cannot size a linear domain and is rejected.
pub fn summarize(dataset: &[Series]) -> ChartResult<DataSummary> {
    if dataset.is_empty() {
        return Err(ChartError::InvalidData("dataset must contain at least one series".to_owned()));
    }

    let mut row_keys: IndexSet<&str> = IndexSet::new();
    let mut column_keys: IndexSet<&str> = IndexSet::new();
    let mut value_min: Option<OrderedFloat<f64>> = None;
    let mut value_max: Option<OrderedFloat<f64>> = None;
    let mut skipped = 0usize;

    for series in dataset {
        row_keys.insert(series.key.as_str());
        for point in &series.points {
            column_keys.insert(point.key.as_str());
            if !point.value.is_finite() {
                skipped += 1;
                continue;
            }
            let value = OrderedFloat(point.value);
            value_min = Some(value_min.map_or(value, |current| current.min(value)));
            value_max = Some(value_max.map_or(value, |current| current.max(value)));
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped non-finite values while summarizing dataset");
    }

    let (Some(value_min), Some(value_max)) = (value_min, value_max) else {
        return Err(ChartError::InvalidData("dataset has no finite values".to_owned()));
    };

    let summary = DataSummary {
        row_keys: row_keys.into_iter().map(str::to_owned).collect(),
        column_keys: column_keys.into_iter().map(str::to_owned).collect(),
        value_min: value_min.into_inner(),
        value_max: value_max.into_inner(),
    };
    debug!(
        rows = summary.row_keys.len(),
        columns = summary.column_keys.len(),
        value_min = summary.value_min,
        value_max = summary.value_max,
        "summarized dataset"
    );
    Ok(summary)
}

/// Summarizes a single series as a one-row dataset.
pub fn summarize_series(series: &Series) -> ChartResult<DataSummary> {
    summarize(std::slice::from_ref(series))
}
