//! Pure derivations from the [`ViewModel`](crate::models::view_model::ViewModel)
//! to renderable structures. Nothing in here performs I/O or mutates state.

pub mod cards;
pub mod charts;
pub mod format;
pub mod screen;
pub mod tables;

pub use cards::summary_cards;
pub use charts::{allocation_chart, performance_chart};
pub use screen::screen;
pub use tables::{holdings_table, recent_transactions_table};
