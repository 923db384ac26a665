use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod allocation;
pub mod performance;
pub mod settings;
pub mod stock;
pub mod summary;
pub mod transaction;
pub mod view_model;

/// Accept a JSON number, a numeric string, or null.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
