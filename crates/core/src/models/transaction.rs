use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient_number;
use crate::errors::CoreError;

/// A single recorded purchase as returned by the backend.
///
/// `total` (shares × purchase_price) is derived at render time and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub ticker: String,

    #[serde(deserialize_with = "lenient_number")]
    pub shares: Option<f64>,

    /// ISO date string (YYYY-MM-DD), kept as sent
    pub purchase_date: String,

    #[serde(deserialize_with = "lenient_number")]
    pub purchase_price: Option<f64>,
}

impl Transaction {
    /// shares × purchase_price, when both are known.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        Some(self.shares? * self.purchase_price?)
    }
}

/// Envelope of `GET /portfolio/{id}/transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsPayload {
    pub transactions: Option<Vec<Transaction>>,
}

/// Body of `POST /portfolio/{id}/transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub ticker: String,
    pub shares: f64,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
}

/// Editable fields of the add-transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Ticker,
    Shares,
    PurchaseDate,
    PurchasePrice,
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftField::Ticker => write!(f, "ticker"),
            DraftField::Shares => write!(f, "shares"),
            DraftField::PurchaseDate => write!(f, "purchase_date"),
            DraftField::PurchasePrice => write!(f, "purchase_price"),
        }
    }
}

/// Draft transaction as typed into the form, before any parsing.
///
/// Cleared back to empty strings after a successful submit or a cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub ticker: String,
    pub shares: String,
    pub purchase_date: String,
    pub purchase_price: String,
}

/// The form state is the draft itself.
pub type TransactionFormState = TransactionDraft;

impl TransactionDraft {
    pub fn new(
        ticker: impl Into<String>,
        shares: impl Into<String>,
        purchase_date: impl Into<String>,
        purchase_price: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            shares: shares.into(),
            purchase_date: purchase_date.into(),
            purchase_price: purchase_price.into(),
        }
    }

    /// Update one field. The ticker is upper-cased as it is typed.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Ticker => self.ticker = value.to_uppercase(),
            DraftField::Shares => self.shares = value,
            DraftField::PurchaseDate => self.purchase_date = value,
            DraftField::PurchasePrice => self.purchase_price = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Ticker => &self.ticker,
            DraftField::Shares => &self.shares,
            DraftField::PurchaseDate => &self.purchase_date,
            DraftField::PurchasePrice => &self.purchase_price,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields that are still blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [
            DraftField::Ticker,
            DraftField::Shares,
            DraftField::PurchaseDate,
            DraftField::PurchasePrice,
        ]
        .into_iter()
        .filter(|f| self.get(*f).trim().is_empty())
        .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Build the request body: required fields present, ticker upper-cased,
    /// numbers and date parsed. Range checks are left to the backend.
    pub fn to_request(&self) -> Result<NewTransaction, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            return Err(CoreError::ValidationError(format!(
                "Missing required field(s): {}",
                names.join(", ")
            )));
        }

        let shares = parse_number(DraftField::Shares, &self.shares)?;
        let purchase_price = parse_number(DraftField::PurchasePrice, &self.purchase_price)?;
        let purchase_date = NaiveDate::parse_from_str(self.purchase_date.trim(), "%Y-%m-%d")
            .map_err(|_| {
                CoreError::ValidationError(format!(
                    "purchase_date '{}' is not a YYYY-MM-DD date",
                    self.purchase_date
                ))
            })?;

        Ok(NewTransaction {
            ticker: self.ticker.trim().to_uppercase(),
            shares,
            purchase_date,
            purchase_price,
        })
    }
}

fn parse_number(field: DraftField, raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CoreError::ValidationError(format!("{field} '{raw}' is not a number")))
}
