use serde::Serialize;

use super::format;
use crate::models::summary::Position;
use crate::models::transaction::Transaction;
use crate::models::view_model::ViewModel;

/// Most recent transactions shown in the transactions table.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

pub const HOLDINGS_COLUMNS: [&str; 7] = [
    "Ticker",
    "Shares",
    "Avg Cost",
    "Current Price",
    "Value",
    "Gain/Loss",
    "Weight",
];
pub const TRANSACTIONS_COLUMNS: [&str; 5] = ["Date", "Ticker", "Shares", "Price", "Total"];

pub const NO_HOLDINGS: &str = "No holdings yet. Click \"Add Transaction\" to get started!";
pub const NO_TRANSACTIONS: &str = "No transactions yet";

/// Gain (non-negative) or loss colouring, decided from the signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Gain,
    Loss,
}

impl Tone {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Gain
        } else {
            Tone::Loss
        }
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Gain => "#16A34A",
            Tone::Loss => "#DC2626",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table<R> {
    pub columns: &'static [&'static str],
    pub rows: Vec<R>,

    /// Shown across all columns when `rows` is empty
    pub empty_message: &'static str,
}

impl<R> Table<R> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRow {
    pub ticker: String,
    pub shares: String,
    pub avg_cost: String,
    pub current_price: String,
    pub current_value: String,
    pub gain_loss: String,
    pub gain_loss_percent: String,
    pub weight: String,
    pub tone: Tone,
}

impl HoldingRow {
    /// Missing numbers become empty cells; nothing here can fail.
    #[must_use]
    pub fn from_position(position: &Position) -> Self {
        Self {
            ticker: position.ticker.clone(),
            shares: format::number(position.shares),
            avg_cost: format::cell(position.avg_cost, format::dollars),
            current_price: format::cell(position.current_price, format::dollars),
            current_value: format::cell(position.current_value, format::dollars),
            gain_loss: format::cell(position.gain_loss, format::signed),
            gain_loss_percent: format::cell(position.gain_loss_percent, |v| {
                format!("({}%)", format::signed(v))
            }),
            weight: format::cell(position.weight, |v| format!("{v:.2}%")),
            tone: Tone::of(position.gain_loss.unwrap_or(0.0)),
        }
    }
}

/// One row per position, in the order the backend sent them.
#[must_use]
pub fn holdings_table(view: &ViewModel) -> Table<HoldingRow> {
    let rows = view
        .summary
        .as_ref()
        .map(|s| s.positions().iter().map(HoldingRow::from_position).collect())
        .unwrap_or_default();
    Table {
        columns: &HOLDINGS_COLUMNS,
        rows,
        empty_message: NO_HOLDINGS,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub ticker: String,
    pub shares: String,
    pub price: String,
    pub total: String,
}

impl TransactionRow {
    #[must_use]
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            date: transaction.purchase_date.clone(),
            ticker: transaction.ticker.clone(),
            shares: format::number(transaction.shares),
            price: format::cell(transaction.purchase_price, format::dollars),
            total: format::cell(transaction.total(), format::dollars),
        }
    }
}

/// The ten most recently added transactions, newest first.
///
/// Ordering is by arrival order from the backend, not by purchase date.
#[must_use]
pub fn recent_transactions_table(view: &ViewModel) -> Table<TransactionRow> {
    let rows = view
        .transactions
        .iter()
        .rev()
        .take(RECENT_TRANSACTIONS_LIMIT)
        .map(TransactionRow::from_transaction)
        .collect();
    Table {
        columns: &TRANSACTIONS_COLUMNS,
        rows,
        empty_message: NO_TRANSACTIONS,
    }
}
