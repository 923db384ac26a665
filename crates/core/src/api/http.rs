use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::PortfolioApi;
use crate::errors::CoreError;
use crate::models::performance::PerformancePayload;
use crate::models::settings::ApiSettings;
use crate::models::stock::{HealthStatus, StockInfo};
use crate::models::summary::PortfolioSummary;
use crate::models::transaction::{NewTransaction, TransactionsPayload};

/// reqwest-backed client for the Portfolio API.
///
/// - **Base**: `settings.base_url` (default `http://localhost:5000/api`)
/// - **Scope**: every portfolio endpoint is under `/portfolio/{portfolio_id}`
/// - **Timeout**: `settings.request_timeout_secs` on native targets
pub struct HttpPortfolioApi {
    client: Client,
    settings: ApiSettings,
}

impl HttpPortfolioApi {
    pub fn new(settings: ApiSettings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    // ── URL building ────────────────────────────────────────────────

    #[must_use]
    pub fn summary_url(&self) -> String {
        format!("{}/summary", self.settings.portfolio_url())
    }

    #[must_use]
    pub fn performance_url(&self, start_date: NaiveDate) -> String {
        format!(
            "{}/performance?start_date={}",
            self.settings.portfolio_url(),
            start_date.format("%Y-%m-%d")
        )
    }

    #[must_use]
    pub fn allocation_url(&self) -> String {
        format!("{}/allocation", self.settings.portfolio_url())
    }

    #[must_use]
    pub fn transactions_url(&self) -> String {
        format!("{}/transactions", self.settings.portfolio_url())
    }

    #[must_use]
    pub fn create_transaction_url(&self) -> String {
        format!("{}/transaction", self.settings.portfolio_url())
    }

    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.settings.api_root())
    }

    #[must_use]
    pub fn stock_url(&self, ticker: &str) -> String {
        format!("{}/stock/{}", self.settings.api_root(), ticker.trim().to_uppercase())
    }

    // ── Request helpers ─────────────────────────────────────────────

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CoreError> {
        debug!("GET {url}");
        let resp = ensure_success(self.client.get(url).send().await?).await?;
        resp.json::<T>().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse response from {url}: {e}"))
        })
    }
}

/// Pass 2xx responses through; turn anything else into [`CoreError::Api`].
async fn ensure_success(resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    Err(CoreError::Api {
        status: status.as_u16(),
        body: error_body(&text),
    })
}

/// Compact JSON when the body parses, the raw text otherwise.
pub(crate) fn error_body(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value.to_string(),
        Err(_) => text.trim().to_string(),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioApi for HttpPortfolioApi {
    fn name(&self) -> &str {
        "PortfolioAPI"
    }

    async fn get_summary(&self) -> Result<PortfolioSummary, CoreError> {
        self.get_json(&self.summary_url()).await
    }

    async fn get_performance(
        &self,
        start_date: NaiveDate,
    ) -> Result<PerformancePayload, CoreError> {
        self.get_json(&self.performance_url(start_date)).await
    }

    async fn get_allocation(&self) -> Result<Value, CoreError> {
        self.get_json(&self.allocation_url()).await
    }

    async fn get_transactions(&self) -> Result<TransactionsPayload, CoreError> {
        self.get_json(&self.transactions_url()).await
    }

    async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), CoreError> {
        let url = self.create_transaction_url();
        debug!("POST {url} ({})", transaction.ticker);
        let resp = self.client.post(&url).json(transaction).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<HealthStatus, CoreError> {
        self.get_json(&self.health_url()).await
    }

    async fn get_stock_info(&self, ticker: &str) -> Result<StockInfo, CoreError> {
        let info: StockInfo = self.get_json(&self.stock_url(ticker)).await?;
        info.into_result(&ticker.trim().to_uppercase())
    }
}
