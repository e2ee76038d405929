//! Callback (IPN) payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a Coinify callback, decoded after its signature was verified.
///
/// `data` holds the affected object (an invoice or buy order) as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackPayload {
    /// E.g. `invoice_state_change` or `buy_order_state_change`.
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl CallbackPayload {
    /// The `id` of the affected object, if present.
    pub fn object_id(&self) -> Option<u64> {
        self.data.get("id").and_then(Value::as_u64)
    }

    /// The new `state` of the affected object, if present.
    pub fn state(&self) -> Option<&str> {
        self.data.get("state").and_then(Value::as_str)
    }
}
