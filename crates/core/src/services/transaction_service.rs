use log::{error, info, warn};
use std::sync::Arc;

use crate::api::traits::PortfolioApi;
use crate::errors::CoreError;
use crate::models::transaction::{NewTransaction, TransactionDraft};
use crate::models::view_model::Notice;

/// Sends new buy transactions to the backend.
///
/// Nothing is merged into local state here: after a successful write the
/// dashboard resyncs so gain/loss and weights come from the server.
pub struct TransactionService {
    api: Arc<dyn PortfolioApi>,
}

impl TransactionService {
    pub fn new(api: Arc<dyn PortfolioApi>) -> Self {
        Self { api }
    }

    /// Build the request from `draft` and send it.
    ///
    /// Returns the body that was accepted by the server.
    pub async fn submit(&self, draft: &TransactionDraft) -> Result<NewTransaction, CoreError> {
        let request = draft.to_request()?;
        info!(
            "Adding transaction: {} x {} @ {} on {}",
            request.ticker, request.shares, request.purchase_price, request.purchase_date
        );

        match self.api.create_transaction(&request).await {
            Ok(()) => Ok(request),
            Err(e) => {
                match &e {
                    CoreError::Api { status, .. } => {
                        warn!("Backend rejected transaction for {} (HTTP {status})", request.ticker)
                    }
                    _ => error!("Error adding transaction: {e}"),
                }
                Err(e)
            }
        }
    }
}

/// Notice shown to the user when a submit fails.
///
/// Server rejections echo the server's error payload; everything else gets a
/// generic message.
#[must_use]
pub fn failure_notice(err: &CoreError) -> Notice {
    match err {
        CoreError::Api { body, .. } => Notice::new(format!("Error adding transaction: {body}")),
        CoreError::ValidationError(msg) => Notice::new(format!("Error adding transaction: {msg}")),
        _ => Notice::new("Failed to add transaction"),
    }
}
