use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::allocation::AllocationPayload;
use super::performance::PerformancePoint;
use super::summary::PortfolioSummary;
use super::transaction::{Transaction, TransactionDraft};

/// The client-held snapshot of everything the dashboard renders.
///
/// Data fields (`summary`, `performance`, `allocation`, `transactions`) are
/// only ever replaced together by a [`ViewModelUpdate`]; the remaining fields
/// are UI-transient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub summary: Option<PortfolioSummary>,
    pub performance: Vec<PerformancePoint>,
    pub allocation: AllocationPayload,

    /// Arrival order from the backend (oldest first)
    pub transactions: Vec<Transaction>,

    pub loading: bool,
    pub error: Option<String>,

    /// Contents of the add-transaction form
    pub draft: TransactionDraft,
    pub show_form: bool,

    /// Blocking notification raised by a failed submit
    pub notice: Option<Notice>,

    /// When the last sync was committed
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl ViewModel {
    /// True once any sync has been committed.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.last_synced_at.is_some()
    }
}

/// The four fetched resources, normalized and ready to commit at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModelUpdate {
    pub summary: PortfolioSummary,
    pub performance: Vec<PerformancePoint>,
    pub allocation: AllocationPayload,
    pub transactions: Vec<Transaction>,
}

/// A message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
