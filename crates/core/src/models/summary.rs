use serde::{Deserialize, Serialize};

use super::lenient_number;

/// Aggregated portfolio metrics as computed by the backend.
///
/// Every field is optional in transit: the backend may omit any of them
/// (empty portfolio, partial failure on its side) and the dashboard still
/// has to render. Missing values fall back at render time, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSummary {
    /// Current market value of all positions
    pub total_value: Option<f64>,

    /// Absolute return: total_value - total_cost
    pub total_return: Option<f64>,

    /// Return as a percentage of total_cost (signed, e.g. -3.41)
    pub total_return_percent: Option<f64>,

    /// Total amount invested across all transactions
    pub total_cost: Option<f64>,

    /// Number of open positions
    pub num_positions: Option<u64>,

    /// Per-ticker breakdown, in the order the backend sent it
    pub positions: Option<Vec<Position>>,
}

impl PortfolioSummary {
    /// Position count as reported, falling back to the length of `positions`.
    #[must_use]
    pub fn position_count(&self) -> u64 {
        self.num_positions
            .unwrap_or_else(|| self.positions().len() as u64)
    }

    /// True when `num_positions` and `positions` agree (or either is absent).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match (&self.positions, self.num_positions) {
            (Some(positions), Some(n)) => positions.len() as u64 == n,
            _ => true,
        }
    }

    /// Positions as a slice; empty when the backend sent none.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        self.positions.as_deref().unwrap_or(&[])
    }
}

/// An aggregated holding in one ticker.
///
/// Numeric fields accept numeric strings the same way [`Transaction`] does.
///
/// [`Transaction`]: super::transaction::Transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub ticker: String,
    #[serde(deserialize_with = "lenient_number")]
    pub shares: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub avg_cost: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub current_price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub current_value: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub gain_loss: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub gain_loss_percent: Option<f64>,

    /// Percent of portfolio value, 0–100
    #[serde(deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
}
