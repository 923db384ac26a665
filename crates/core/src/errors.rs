use thiserror::Error;

/// Unified error type for the entire portfolio-dashboard-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// Both the read path (sync) and the write path (transaction submit) report
/// through this type; the store decides how each failure is surfaced.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {body}")]
    Api {
        status: u16,
        body: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The backend answered but could not resolve the ticker.
    #[error("Stock lookup failed for {ticker}: {message}")]
    StockLookup {
        ticker: String,
        message: String,
    },

    // ── Input / Configuration ───────────────────────────────────────
    #[error("Transaction validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl CoreError {
    /// True for failures where the request never produced an HTTP response.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, CoreError::Network(_))
    }

    /// HTTP status of a rejected request, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return CoreError::Deserialization(e.to_string());
        }
        CoreError::Network(e.to_string())
    }
}
