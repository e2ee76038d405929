//! The response envelope every Coinify endpoint wraps its result in.
//!
//! ```text
//! {"success": true,  "data": ...}
//! {"success": false, "error": {"code": "...", "message": "...", "url": "..."}}
//! ```
//!
//! The client hands the envelope back untouched; these types are for callers
//! that want to unwrap it.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<ApiFailure>,
}

/// The API's own error report, sent with `"success": false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiFailure {
    pub code: String,
    pub message: String,
    /// Link to the documentation for this error, when the API provides one.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("api error: {0}")]
    Api(ApiFailure),
    #[error("unexpected response data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiEnvelope {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Decode `data` on success, or surface the API error.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, EnvelopeError> {
        if !self.success {
            let failure = self.error.unwrap_or_else(|| ApiFailure {
                code: "unknown_error".to_owned(),
                message: "request failed without an error description".to_owned(),
                url: None,
            });
            return Err(EnvelopeError::Api(failure));
        }
        Ok(serde_json::from_value(self.data.unwrap_or(Value::Null))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Balance {
        btc: f64,
        fiat_currency: String,
    }

    #[test]
    fn test_success_unwraps_data() {
        let envelope = ApiEnvelope::from_value(json!({
            "success": true,
            "data": { "btc": 1.25, "fiat": 5000.0, "fiat_currency": "EUR" }
        }))
        .unwrap();
        let balance: Balance = envelope.into_result().unwrap();
        assert_eq!(balance.btc, 1.25);
        assert_eq!(balance.fiat_currency, "EUR");
    }

    #[test]
    fn test_failure_surfaces_api_error() {
        let envelope = ApiEnvelope::from_value(json!({
            "success": false,
            "error": {
                "code": "invoice_not_found",
                "message": "Invoice with ID 1 not found",
                "url": "https://www.coinify.com/docs/api/#error-codes"
            }
        }))
        .unwrap();
        match envelope.into_result::<Value>() {
            Err(EnvelopeError::Api(failure)) => {
                assert_eq!(failure.code, "invoice_not_found");
                assert!(failure.url.is_some());
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_error_object() {
        let envelope = ApiEnvelope::from_value(json!({ "success": false })).unwrap();
        assert!(matches!(
            envelope.into_result::<Value>(),
            Err(EnvelopeError::Api(ApiFailure { ref code, .. })) if code == "unknown_error"
        ));
    }
}
