use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One keyed observation inside a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub key: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// One named series of keyed observations.
///
/// The serialized shape matches the d3 dataset convention
/// (`{"key": ..., "values": [{"key": ..., "value": ...}, ...]}`) so
/// existing JSON datasets load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    #[serde(rename = "values")]
    pub points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            key: key.into(),
            points,
        }
    }

    /// Builds a series from `(key, value)` pairs.
    #[must_use]
    pub fn from_pairs<K: Into<String>>(key: impl Into<String>, pairs: Vec<(K, f64)>) -> Self {
        let points = pairs.into_iter().map(|(k, v)| DataPoint::new(k, v)).collect();
        Self::new(key, points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Parses one series from its JSON representation.
pub fn series_from_json_str(input: &str) -> ChartResult<Series> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse series: {e}")))
}

/// Parses a multi-series dataset from its JSON representation.
pub fn dataset_from_json_str(input: &str) -> ChartResult<Vec<Series>> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset: {e}")))
}
