use chrono::Utc;
use log::{debug, warn};

use crate::models::transaction::{DraftField, TransactionDraft};
use crate::models::view_model::{Notice, ViewModel, ViewModelUpdate};

/// Proof that a sync was started, carrying its generation number.
///
/// Generations increase monotonically per store; only the most recently
/// issued ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SyncTicket {
    generation: u64,
}

impl SyncTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a commit did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// New data replaced the four data fields
    Applied,
    /// The error message was recorded; data fields untouched
    Failed,
    /// A newer sync was started after this one; nothing changed
    Stale,
}

/// Exclusively-owned holder of the [`ViewModel`].
///
/// All writes go through the methods below. Commit points are: the start and
/// end of a sync, the end of a submit, and form edits. Readers only ever get
/// `&ViewModel`.
#[derive(Debug, Default)]
pub struct ViewModelStore {
    view: ViewModel,
    issued: u64,
}

impl ViewModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Generation of the most recently issued ticket (0 before any sync).
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.issued
    }

    // ── Sync lifecycle ──────────────────────────────────────────────

    /// Mark a sync as started: loading on, error cleared, new ticket issued.
    pub fn begin_sync(&mut self) -> SyncTicket {
        self.issued += 1;
        self.view.loading = true;
        self.view.error = None;
        debug!("Sync #{} started", self.issued);
        SyncTicket {
            generation: self.issued,
        }
    }

    /// Replace summary, performance, allocation and transactions in one step.
    pub fn commit_sync(&mut self, ticket: SyncTicket, update: ViewModelUpdate) -> CommitOutcome {
        if !self.is_current(ticket) {
            return CommitOutcome::Stale;
        }
        let ViewModelUpdate {
            summary,
            performance,
            allocation,
            transactions,
        } = update;
        self.view.summary = Some(summary);
        self.view.performance = performance;
        self.view.allocation = allocation;
        self.view.transactions = transactions;
        self.view.loading = false;
        self.view.last_synced_at = Some(Utc::now());
        debug!("Sync #{} committed", ticket.generation);
        CommitOutcome::Applied
    }

    /// Record a failed sync. Previously committed data stays visible.
    pub fn fail_sync(&mut self, ticket: SyncTicket, message: impl Into<String>) -> CommitOutcome {
        if !self.is_current(ticket) {
            return CommitOutcome::Stale;
        }
        self.view.error = Some(message.into());
        self.view.loading = false;
        CommitOutcome::Failed
    }

    fn is_current(&self, ticket: SyncTicket) -> bool {
        if ticket.generation != self.issued {
            warn!(
                "Discarding result of sync #{}: sync #{} is newer",
                ticket.generation, self.issued
            );
            return false;
        }
        true
    }

    // ── Transaction form ────────────────────────────────────────────

    #[must_use]
    pub fn draft(&self) -> &TransactionDraft {
        &self.view.draft
    }

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.view.draft.set(field, value);
    }

    pub fn toggle_form(&mut self) {
        self.view.show_form = !self.view.show_form;
    }

    /// Hide the form and drop whatever was typed.
    pub fn cancel_form(&mut self) {
        self.view.show_form = false;
        self.view.draft.clear();
    }

    /// A submit went through: clear the draft and hide the form.
    pub fn complete_submit(&mut self) {
        self.cancel_form();
    }

    // ── Notices ─────────────────────────────────────────────────────

    pub fn raise_notice(&mut self, notice: Notice) {
        self.view.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.view.notice.take()
    }
}
