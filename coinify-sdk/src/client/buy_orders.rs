//! Buy order endpoints (`/v3/buys`).

use super::{ApiRequest, ApiResult, CoinifyClient};
use crate::objects::{BuyOrderCreate, BuyOrderListQuery};

impl CoinifyClient {
    /// `GET /v3/buys` – list the merchant's buy orders.
    pub async fn buy_orders_list(&self, query: &BuyOrderListQuery) -> ApiResult {
        let request = ApiRequest::get("/v3/buys")
            .authenticated()
            .with_query(query);
        self.call(request).await
    }

    /// `POST /v3/buys` – create a new buy order.
    pub async fn buy_order_create(&self, order: &BuyOrderCreate) -> ApiResult {
        let request = ApiRequest::post("/v3/buys")
            .authenticated()
            .with_body(order);
        self.call(request).await
    }

    /// `PUT /v3/buys/{buy_order_id}/actions/confirm`
    pub async fn buy_order_confirm(&self, buy_order_id: u64) -> ApiResult {
        let request =
            ApiRequest::put(format!("/v3/buys/{buy_order_id}/actions/confirm")).authenticated();
        self.perform_call(request).await
    }

    /// `GET /v3/buys/{buy_order_id}`
    pub async fn buy_order_get(&self, buy_order_id: u64) -> ApiResult {
        let request = ApiRequest::get(format!("/v3/buys/{buy_order_id}")).authenticated();
        self.perform_call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CoinifyClient {
        CoinifyClient::new("key", "secret")
            .with_base_url(server.uri())
            .with_http_client(reqwest::Client::builder().no_proxy().build().unwrap())
    }

    fn ok() -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": {} }))
    }

    #[tokio::test]
    async fn test_buy_order_lifecycle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/buys"))
            .and(body_json(json!({
                "amount": 100.0,
                "currency": "EUR",
                "btc_address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
            })))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v3/buys/9/actions/confirm"))
            .and(header_exists("authorization"))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/buys/9"))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        let order =
            BuyOrderCreate::new(Decimal::new(100, 0), "EUR", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        client.buy_order_create(&order).await.unwrap();
        client.buy_order_confirm(9).await.unwrap();
        client.buy_order_get(9).await.unwrap();
    }

    #[tokio::test]
    async fn test_buy_orders_list_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/buys"))
            .and(query_param("offset", "20"))
            .and(query_param("include_cancelled", "0"))
            .respond_with(ok())
            .expect(1)
            .mount(&server)
            .await;

        let query = BuyOrderListQuery {
            limit: None,
            offset: Some(20),
            include_cancelled: Some(false),
        };
        client(&server).buy_orders_list(&query).await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received[0].url.query(), Some("offset=20&include_cancelled=0"));
    }
}
