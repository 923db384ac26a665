use serde::Serialize;

use crate::models::view_model::ViewModel;

pub const LOADING_MESSAGE: &str = "Loading portfolio data...";
pub const RETRY_LABEL: &str = "Retry Connection";

/// Which top-level screen to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// First load still in flight
    Loading { message: &'static str },

    /// No data yet and the last sync failed; replaces the dashboard
    Error {
        message: String,
        retry_label: &'static str,
    },

    /// Data is available. A failed refresh after a successful load keeps the
    /// old data on screen and reports the failure alongside it.
    Dashboard {
        refreshing: bool,
        stale_error: Option<String>,
    },
}

#[must_use]
pub fn screen(view: &ViewModel) -> Screen {
    if !view.has_data() {
        if let Some(message) = &view.error {
            return Screen::Error {
                message: message.clone(),
                retry_label: RETRY_LABEL,
            };
        }
        return Screen::Loading {
            message: LOADING_MESSAGE,
        };
    }
    Screen::Dashboard {
        refreshing: view.loading,
        stale_error: view.error.clone(),
    }
}
