//! Buy order endpoint parameters.

use rust_decimal::Decimal;
use serde::Serialize;

/// Query for `GET /v3/buys`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuyOrderListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cancelled: Option<bool>,
}

/// Body for `POST /v3/buys`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyOrderCreate {
    /// Amount to buy BTC for, denominated in `currency`.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Either `BTC` or the merchant account currency.
    pub currency: String,
    /// Where the bought bitcoins are sent.
    pub btc_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_email: Option<String>,
}

impl BuyOrderCreate {
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
        btc_address: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            btc_address: btc_address.into(),
            instant_order: None,
            callback_url: None,
            callback_email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instant_order_serialized_as_bool() {
        let order = BuyOrderCreate {
            instant_order: Some(true),
            ..BuyOrderCreate::new(Decimal::new(25, 0), "EUR", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT")
        };
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "amount": 25.0,
                "currency": "EUR",
                "btc_address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
                "instant_order": true,
            })
        );
    }
}
