use chrono::NaiveDate;
use log::{error, info, warn};
use serde_json::Value;
use std::sync::Arc;

use crate::api::traits::PortfolioApi;
use crate::errors::CoreError;
use crate::models::allocation::AllocationPayload;
use crate::models::performance::PerformancePayload;
use crate::models::summary::PortfolioSummary;
use crate::models::transaction::TransactionsPayload;
use crate::models::view_model::ViewModelUpdate;

/// Fetches the four dashboard resources and normalizes them into one update.
///
/// The service never touches the store: it produces a [`ViewModelUpdate`] or
/// an error, and the owner of the store decides whether to commit it.
pub struct SyncService {
    api: Arc<dyn PortfolioApi>,
    performance_start_date: NaiveDate,
    backend_hint: String,
}

impl SyncService {
    pub fn new(
        api: Arc<dyn PortfolioApi>,
        performance_start_date: NaiveDate,
        backend_hint: impl Into<String>,
    ) -> Self {
        Self {
            api,
            performance_start_date,
            backend_hint: backend_hint.into(),
        }
    }

    /// Fetch summary, performance, allocation and transactions concurrently.
    ///
    /// All four requests are started together. The first failure fails the
    /// whole sync and none of the other results are returned.
    pub async fn sync(&self) -> Result<ViewModelUpdate, CoreError> {
        let result = futures::try_join!(
            self.api.get_summary(),
            self.api.get_performance(self.performance_start_date),
            self.api.get_allocation(),
            self.api.get_transactions(),
        );

        match result {
            Ok((summary, performance, allocation, transactions)) => {
                let update = normalize(summary, performance, allocation, transactions);
                info!(
                    "Fetched portfolio from {}: {} positions, {} performance points, {} sectors, {} transactions",
                    self.api.name(),
                    update.summary.positions().len(),
                    update.performance.len(),
                    update.allocation.by_sector.len(),
                    update.transactions.len(),
                );
                Ok(update)
            }
            Err(e) => {
                error!("Error fetching data from {}: {e}", self.api.name());
                Err(e)
            }
        }
    }

    /// Message shown on the error screen after a failed sync.
    #[must_use]
    pub fn failure_message(&self) -> String {
        format!(
            "Failed to load portfolio data. Make sure your backend is running at {}.",
            self.backend_hint
        )
    }
}

/// Turn the four raw payloads into a committable update.
///
/// - performance without both `dates` and `values` becomes an empty series
/// - ragged `dates`/`values` are paired up to the shorter length
/// - an allocation of any other shape becomes an empty sector list
/// - a missing `transactions` field becomes an empty list
pub fn normalize(
    summary: PortfolioSummary,
    performance: PerformancePayload,
    allocation: Value,
    transactions: TransactionsPayload,
) -> ViewModelUpdate {
    if !summary.is_consistent() {
        warn!(
            "Summary reports {:?} positions but lists {}",
            summary.num_positions,
            summary.positions().len()
        );
    }

    if !performance.has_series() {
        warn!("Performance payload has no dates/values arrays; showing no performance data");
    } else if performance.is_ragged() {
        warn!("Performance dates and values differ in length; truncating to the shorter");
    }
    let performance = performance.into_points();

    let (allocation, malformed) = AllocationPayload::from_value_lenient(allocation);
    if malformed {
        warn!("Allocation payload is malformed; showing no sector data");
    }

    let transactions = transactions.transactions.unwrap_or_else(|| {
        warn!("Transactions payload has no transactions field");
        Vec::new()
    });

    ViewModelUpdate {
        summary,
        performance,
        allocation,
        transactions,
    }
}
