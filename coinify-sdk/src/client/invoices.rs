//! Invoice endpoints (`/v3/invoices`).

use super::{ApiRequest, ApiResult, CoinifyClient};
use crate::objects::{InvoiceCreate, InvoiceInputCreate, InvoiceListQuery, InvoiceUpdate};

impl CoinifyClient {
    /// `GET /v3/invoices` – list the merchant's invoices.
    pub async fn invoices_list(&self, query: &InvoiceListQuery) -> ApiResult {
        let request = ApiRequest::get("/v3/invoices")
            .authenticated()
            .with_query(query);
        self.call(request).await
    }

    /// `POST /v3/invoices` – create a new invoice.
    pub async fn invoice_create(&self, invoice: &InvoiceCreate) -> ApiResult {
        let request = ApiRequest::post("/v3/invoices")
            .authenticated()
            .with_body(invoice);
        self.call(request).await
    }

    /// `GET /v3/invoices/{invoice_id}`
    pub async fn invoice_get(&self, invoice_id: u64) -> ApiResult {
        let request = ApiRequest::get(format!("/v3/invoices/{invoice_id}")).authenticated();
        self.perform_call(request).await
    }

    /// `PUT /v3/invoices/{invoice_id}` – update description and custom data.
    pub async fn invoice_update(&self, invoice_id: u64, update: &InvoiceUpdate) -> ApiResult {
        let request = ApiRequest::put(format!("/v3/invoices/{invoice_id}"))
            .authenticated()
            .with_body(update);
        self.call(request).await
    }

    /// `POST /v3/invoices/{invoice_id}/inputs` – request payment of the
    /// invoice in another input currency.
    pub async fn invoice_input_create(
        &self,
        invoice_id: u64,
        input: &InvoiceInputCreate,
    ) -> ApiResult {
        let request = ApiRequest::post(format!("/v3/invoices/{invoice_id}/inputs"))
            .authenticated()
            .with_body(input);
        self.call(request).await
    }
}
