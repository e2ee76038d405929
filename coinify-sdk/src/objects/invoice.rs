//! Invoice endpoint parameters.
//!
//! Optional fields are skipped when `None`; the API never sees `null`
//! placeholders for arguments the caller left out.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// Query for `GET /v3/invoices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceListQuery {
    /// Maximum number of invoices to return (the API caps this at 200).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_expired: Option<bool>,
}

/// Body for `POST /v3/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceCreate {
    /// Fiat price of the invoice.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// ISO 4217 code denominating `amount`.
    pub currency: String,
    pub plugin_name: String,
    pub plugin_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form merchant data echoed back on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    /// Pay in another input currency than BTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_currency: Option<String>,
    /// Refund address for `input_currency`; required when it is set and not BTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_return_address: Option<String>,
}

impl InvoiceCreate {
    /// An invoice with only the required fields set.
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
        plugin_name: impl Into<String>,
        plugin_version: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            plugin_name: plugin_name.into(),
            plugin_version: plugin_version.into(),
            description: None,
            custom: None,
            callback_url: None,
            callback_email: None,
            return_url: None,
            cancel_url: None,
            input_currency: None,
            input_return_address: None,
        }
    }
}

/// Body for `PUT /v3/invoices/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

/// Body for `POST /v3/invoices/{id}/inputs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceInputCreate {
    pub currency: String,
    pub return_address: String,
}
