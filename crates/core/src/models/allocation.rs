use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sector breakdown of the portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationPayload {
    #[serde(default)]
    pub by_sector: Vec<AllocationEntry>,
}

/// Dollar value held in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Sector name (e.g., "Technology")
    pub name: String,

    /// Dollar amount held in this sector
    pub value: f64,
}

impl AllocationPayload {
    /// Interpret an arbitrary JSON body as an allocation.
    ///
    /// Any shape other than `{ by_sector: [{name, value}, ...] }` degrades to
    /// an empty container. Returns the payload and whether it was malformed.
    #[must_use]
    pub fn from_value_lenient(value: Value) -> (Self, bool) {
        match serde_json::from_value::<AllocationPayload>(value) {
            Ok(payload) => (payload, false),
            Err(_) => (Self::default(), true),
        }
    }

    /// Sum of all sector values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.by_sector.iter().map(|e| e.value).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_sector.is_empty()
    }
}
