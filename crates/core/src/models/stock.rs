use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Backend liveness report from `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    #[serde(rename = "upTime")]
    pub up_time: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Quote and profile for one ticker from `GET /stock/{ticker}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StockInfo {
    pub symbol: Option<String>,
    pub long_name: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub currency: Option<String>,

    /// Set instead of the quote fields when the backend failed to resolve
    /// the ticker; such bodies still arrive with HTTP 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StockInfo {
    /// Turn an in-body `error` into [`CoreError::StockLookup`].
    pub fn into_result(self, ticker: &str) -> Result<Self, CoreError> {
        match self.error {
            Some(message) => Err(CoreError::StockLookup {
                ticker: ticker.to_string(),
                message,
            }),
            None => Ok(self),
        }
    }
}
