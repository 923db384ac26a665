pub mod api;
pub mod errors;
pub mod models;
pub mod presentation;
pub mod services;

use log::{info, warn};
use std::sync::Arc;

use api::http::HttpPortfolioApi;
use api::traits::PortfolioApi;
use errors::CoreError;
use models::{
    settings::ApiSettings,
    stock::{HealthStatus, StockInfo},
    transaction::{DraftField, NewTransaction, TransactionDraft},
    view_model::{Notice, ViewModel, ViewModelUpdate},
};
use presentation::screen::Screen;
use services::{
    store::{CommitOutcome, SyncTicket, ViewModelStore},
    sync_service::SyncService,
    transaction_service::{self, TransactionService},
};

/// Main entry point for the portfolio dashboard core.
///
/// Owns the view-model store and is the only place it is written from, so a
/// UI shell drives everything through `&mut self` on its control loop.
#[must_use]
pub struct PortfolioDashboard {
    settings: ApiSettings,
    api: Arc<dyn PortfolioApi>,
    store: ViewModelStore,
    sync_service: SyncService,
    transaction_service: TransactionService,
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("api", &self.api.name())
            .field("settings", &self.settings)
            .field("generation", &self.store.latest_generation())
            .field("loading", &self.store.view().loading)
            .finish()
    }
}

impl PortfolioDashboard {
    /// Dashboard talking to the HTTP backend described by `settings`.
    pub fn new(settings: ApiSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        let api = Arc::new(HttpPortfolioApi::new(settings.clone()));
        Ok(Self::with_api(settings, api))
    }

    /// Dashboard over any [`PortfolioApi`] implementation.
    pub fn with_api(settings: ApiSettings, api: Arc<dyn PortfolioApi>) -> Self {
        let sync_service = SyncService::new(
            api.clone(),
            settings.performance_start_date,
            settings.api_root().to_string(),
        );
        let transaction_service = TransactionService::new(api.clone());
        Self {
            settings,
            api,
            store: ViewModelStore::new(),
            sync_service,
            transaction_service,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Read-only snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> &ViewModel {
        self.store.view()
    }

    /// Top-level screen to render for the current state.
    #[must_use]
    pub fn screen(&self) -> Screen {
        presentation::screen(self.store.view())
    }

    // ── Sync ────────────────────────────────────────────────────────

    /// Fetch all four resources and commit them in one step.
    ///
    /// On failure the error message is stored, previously loaded data stays,
    /// and the error is returned. Call again to retry.
    pub async fn sync(&mut self) -> Result<CommitOutcome, CoreError> {
        let ticket = self.store.begin_sync();
        let result = self.sync_service.sync().await;
        self.finish_sync(ticket, result)
    }

    /// Start a sync without fetching. Pair with [`Self::sync_service`] and
    /// [`Self::finish_sync`] when the fetch runs outside `&mut self`.
    pub fn begin_sync(&mut self) -> SyncTicket {
        self.store.begin_sync()
    }

    #[must_use]
    pub fn sync_service(&self) -> &SyncService {
        &self.sync_service
    }

    /// Commit the result of a fetch started with `ticket`.
    ///
    /// Results of anything but the latest ticket are dropped as
    /// [`CommitOutcome::Stale`] so an old response never overwrites a newer one.
    pub fn finish_sync(
        &mut self,
        ticket: SyncTicket,
        result: Result<ViewModelUpdate, CoreError>,
    ) -> Result<CommitOutcome, CoreError> {
        match result {
            Ok(update) => Ok(self.store.commit_sync(ticket, update)),
            Err(e) => {
                let message = self.sync_service.failure_message();
                if self.store.fail_sync(ticket, message) == CommitOutcome::Stale {
                    return Ok(CommitOutcome::Stale);
                }
                Err(e)
            }
        }
    }

    // ── Transaction form ────────────────────────────────────────────

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.store.edit_draft(field, value);
    }

    #[must_use]
    pub fn draft(&self) -> &TransactionDraft {
        self.store.draft()
    }

    pub fn toggle_form(&mut self) {
        self.store.toggle_form();
    }

    pub fn cancel_form(&mut self) {
        self.store.cancel_form();
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.store.dismiss_notice()
    }

    /// Submit the current draft.
    ///
    /// On success the draft is cleared, the form hidden, and exactly one sync
    /// runs; a failure of that sync is reported through the view model, not
    /// here. On failure a notice is raised and the draft is kept for editing.
    pub async fn submit_transaction(&mut self) -> Result<NewTransaction, CoreError> {
        let draft = self.store.draft().clone();
        match self.transaction_service.submit(&draft).await {
            Ok(accepted) => {
                self.store.complete_submit();
                info!("Transaction for {} recorded; refreshing", accepted.ticker);
                if let Err(e) = self.sync().await {
                    warn!("Refresh after adding transaction failed: {e}");
                }
                Ok(accepted)
            }
            Err(e) => {
                self.store.raise_notice(transaction_service::failure_notice(&e));
                Err(e)
            }
        }
    }

    // ── Backend utilities ───────────────────────────────────────────

    pub async fn check_health(&self) -> Result<HealthStatus, CoreError> {
        self.api.health_check().await
    }

    /// Look up quote and profile data for a ticker (case-insensitive).
    pub async fn lookup_stock(&self, ticker: &str) -> Result<StockInfo, CoreError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(CoreError::ValidationError("ticker must not be empty".into()));
        }
        self.api.get_stock_info(&ticker.to_uppercase()).await
    }
}
