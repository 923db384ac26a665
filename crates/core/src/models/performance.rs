use serde::{Deserialize, Serialize};

/// Raw performance response: two parallel arrays keyed by index.
///
/// Either array may be missing; see [`PerformancePayload::into_points`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformancePayload {
    pub dates: Option<Vec<String>>,
    pub values: Option<Vec<f64>>,
}

/// One point of the portfolio value time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Date label as sent by the backend (YYYY-MM-DD)
    pub date: String,

    /// Portfolio value on that date
    pub value: f64,
}

impl PerformancePayload {
    /// True when both parallel arrays are present.
    #[must_use]
    pub fn has_series(&self) -> bool {
        self.dates.is_some() && self.values.is_some()
    }

    /// True when both arrays are present but of different lengths.
    #[must_use]
    pub fn is_ragged(&self) -> bool {
        match (&self.dates, &self.values) {
            (Some(dates), Some(values)) => dates.len() != values.len(),
            _ => false,
        }
    }

    /// Zip `dates` and `values` into points.
    ///
    /// Pairing follows index order and truncates to the shorter array.
    /// A payload missing either array yields an empty series.
    #[must_use]
    pub fn into_points(self) -> Vec<PerformancePoint> {
        match (self.dates, self.values) {
            (Some(dates), Some(values)) => dates
                .into_iter()
                .zip(values)
                .map(|(date, value)| PerformancePoint { date, value })
                .collect(),
            _ => Vec::new(),
        }
    }
}
