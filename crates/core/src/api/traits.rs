use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::errors::CoreError;
use crate::models::performance::PerformancePayload;
use crate::models::stock::{HealthStatus, StockInfo};
use crate::models::summary::PortfolioSummary;
use crate::models::transaction::{NewTransaction, TransactionsPayload};

/// The Portfolio API as the dashboard consumes it.
///
/// Implementations are bound to one portfolio; callers never pass an id.
/// Valuations, returns and sector classification all happen behind this
/// trait. Tests swap in a mock, the app uses [`super::http::HttpPortfolioApi`].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioApi: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// `GET /portfolio/{id}/summary`
    async fn get_summary(&self) -> Result<PortfolioSummary, CoreError>;

    /// `GET /portfolio/{id}/performance?start_date=YYYY-MM-DD`
    async fn get_performance(&self, start_date: NaiveDate) -> Result<PerformancePayload, CoreError>;

    /// `GET /portfolio/{id}/allocation`
    ///
    /// Returned as raw JSON: a malformed allocation degrades to empty instead
    /// of failing the sync, so shape checking happens in the caller.
    async fn get_allocation(&self) -> Result<Value, CoreError>;

    /// `GET /portfolio/{id}/transactions`
    async fn get_transactions(&self) -> Result<TransactionsPayload, CoreError>;

    /// `POST /portfolio/{id}/transaction`
    ///
    /// A non-2xx answer comes back as [`CoreError::Api`] carrying the server's
    /// error payload.
    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), CoreError>;

    /// `GET /health`
    async fn health_check(&self) -> Result<HealthStatus, CoreError>;

    /// `GET /stock/{TICKER}`
    async fn get_stock_info(&self, ticker: &str) -> Result<StockInfo, CoreError>;
}
