use serde::Serialize;

use super::format;
use crate::models::view_model::ViewModel;

/// Accent colour of a card's icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
}

/// Direction of a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Non-negative is up, negative is down.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    #[must_use]
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
        }
    }
}

/// Percent change shown under a card value: arrow plus absolute magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeIndicator {
    pub direction: Direction,

    /// Absolute value with two decimals and a `%` suffix, e.g. "3.41%"
    pub magnitude: String,
}

impl ChangeIndicator {
    #[must_use]
    pub fn new(percent: f64) -> Self {
        Self {
            direction: Direction::of(percent),
            magnitude: format!("{:.2}%", percent.abs()),
        }
    }
}

impl std::fmt::Display for ChangeIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction.arrow(), self.magnitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub change: Option<ChangeIndicator>,
    pub accent: Accent,
}

/// The four headline metrics, in display order.
///
/// Missing summary fields count as zero.
#[must_use]
pub fn summary_cards(view: &ViewModel) -> [SummaryCard; 4] {
    let summary = view.summary.clone().unwrap_or_default();

    [
        SummaryCard {
            title: "Total Value",
            value: format::currency(summary.total_value.unwrap_or(0.0)),
            change: None,
            accent: Accent::Blue,
        },
        SummaryCard {
            title: "Total Return",
            value: format::currency(summary.total_return.unwrap_or(0.0)),
            change: Some(ChangeIndicator::new(summary.total_return_percent.unwrap_or(0.0))),
            accent: Accent::Green,
        },
        SummaryCard {
            title: "Positions",
            value: summary.position_count().to_string(),
            change: None,
            accent: Accent::Purple,
        },
        SummaryCard {
            title: "Total Invested",
            value: format::currency(summary.total_cost.unwrap_or(0.0)),
            change: None,
            accent: Accent::Orange,
        },
    ]
}
