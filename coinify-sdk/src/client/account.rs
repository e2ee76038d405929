//! Account balance and the public market data endpoints.

use super::{ApiRequest, ApiResult, CoinifyClient};

impl CoinifyClient {
    /// `GET /v3/balance` – BTC and fiat balance of the merchant account.
    pub async fn balance_get(&self) -> ApiResult {
        self.perform_call(ApiRequest::get("/v3/balance").authenticated())
            .await
    }

    /// `GET /v3/rates[/{currency}]` – buy and sell rates, for all currencies
    /// or a single one. Unauthenticated.
    pub async fn rates_get(&self, currency: Option<&str>) -> ApiResult {
        let path = match currency {
            Some(currency) => format!("/v3/rates/{}", urlencoding::encode(currency)),
            None => "/v3/rates".to_owned(),
        };
        self.perform_call(ApiRequest::get(path)).await
    }

    /// `GET /v3/input-currencies` – currencies invoices can be paid in.
    /// Unauthenticated.
    pub async fn input_currencies_list(&self) -> ApiResult {
        self.perform_call(ApiRequest::get("/v3/input-currencies"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CoinifyClient {
        CoinifyClient::new("key", "secret")
            .with_base_url(server.uri())
            .with_http_client(reqwest::Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn test_public_endpoints_are_unsigned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&server)
            .await;

        let client = client(&server);
        client.rates_get(None).await.unwrap();
        client.rates_get(Some("EUR")).await.unwrap();
        client.input_currencies_list().await.unwrap();

        let received = server.received_requests().await.unwrap();
        let paths: Vec<_> = received.iter().map(|r| r.url.path().to_owned()).collect();
        assert_eq!(paths, ["/v3/rates", "/v3/rates/EUR", "/v3/input-currencies"]);
        assert!(
            received
                .iter()
                .all(|r| r.headers.get("authorization").is_none())
        );
    }

    #[tokio::test]
    async fn test_balance_is_signed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/balance"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "btc": 1.5, "fiat": 30000, "fiat_currency": "EUR" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = client(&server).balance_get().await.unwrap();
        assert_eq!(payload["data"]["fiat_currency"], "EUR");
    }
}
