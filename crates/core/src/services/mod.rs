pub mod store;
pub mod sync_service;
pub mod transaction_service;
