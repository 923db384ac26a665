use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Where the dashboard fetches from, and for which portfolio.
///
/// The dashboard tracks exactly one portfolio; `portfolio_id` is fixed for the
/// lifetime of a [`crate::PortfolioDashboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the Portfolio API, including the `/api` path
    pub base_url: String,

    /// Identifier of the single tracked portfolio
    pub portfolio_id: String,

    /// `start_date` filter sent with the performance request
    pub performance_start_date: NaiveDate,

    /// Per-request timeout (native targets only)
    pub request_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            portfolio_id: "portfolio_123".to_string(),
            performance_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            request_timeout_secs: 30,
        }
    }
}

impl ApiSettings {
    /// Load settings from JSON. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.base_url.trim().is_empty() {
            return Err(CoreError::InvalidSettings("base_url must not be empty".into()));
        }
        if self.portfolio_id.trim().is_empty() {
            return Err(CoreError::InvalidSettings("portfolio_id must not be empty".into()));
        }
        Ok(())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_portfolio_id(mut self, portfolio_id: impl Into<String>) -> Self {
        self.portfolio_id = portfolio_id.into();
        self
    }

    pub fn with_performance_start_date(mut self, date: NaiveDate) -> Self {
        self.performance_start_date = date;
        self
    }

    /// `{base_url}/portfolio/{id}` with any trailing slash removed from the base.
    #[must_use]
    pub fn portfolio_url(&self) -> String {
        format!("{}/portfolio/{}", self.api_root(), self.portfolio_id)
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
