//! The signed Coinify API client and its generic call primitive.

use std::sync::Mutex;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use url::Url;

use super::{ApiRequest, ApiResult, ClientError, HttpMethod};
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::query::build_query;
use crate::signature::{Credentials, NonceSequence, sign_request};

/// Details of the most recent failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    pub message: String,
    pub code: &'static str,
}

/// Typed HTTP client for the Coinify API.
///
/// Merchant endpoints are signed with
/// `HMAC-SHA256("{nonce}{api_key}", api_secret)`; public endpoints (rates,
/// input currencies) are sent without an `Authorization` header.
#[derive(Debug)]
pub struct CoinifyClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    nonces: NonceSequence,
    last_error: Mutex<Option<LastError>>,
}

impl CoinifyClient {
    /// Create a client for the production API with the default timeout.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::new(api_key, api_secret))
    }

    fn with_credentials(credentials: Credentials) -> Self {
        Self {
            http: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials,
            nonces: NonceSequence::new(),
            last_error: Mutex::new(None),
        }
    }

    /// Build a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        let credentials =
            Credentials::from_secret(config.api_key.clone(), config.api_secret.clone());
        Ok(Self::with_credentials(credentials)
            .with_base_url(config.base_url())
            .with_http_client(http))
    }

    /// Point the client at another deployment (no trailing slash needed).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A fresh `Authorization` header value with a new nonce.
    pub fn authorization_header(&self) -> String {
        sign_request(&self.credentials, self.nonces.next())
    }

    /// The failure recorded by the most recent failed call, if any.
    ///
    /// Shared by every call on this instance; concurrent callers should
    /// inspect the returned [`ApiResult`] instead.
    #[deprecated(note = "inspect the returned `ApiResult` instead")]
    pub fn last_error(&self) -> Option<LastError> {
        self.last_error.lock().ok().and_then(|slot| slot.clone())
    }

    /// Perform one API call.
    ///
    /// Every HTTP response is returned as `Ok`, whatever its status code:
    /// the API reports its own errors inside the body. A body that is not
    /// JSON comes back as `Value::Null`.
    pub async fn perform_call(&self, request: ApiRequest) -> ApiResult {
        let result = self.dispatch(&request).await;
        if let Err(err) = &result {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                code = err.code(),
                error = %err,
                "Coinify API call failed"
            );
            self.record_error(err);
        }
        result
    }

    /// Perform a call whose request may have failed to build.
    ///
    /// A build failure is logged and recorded like any other failed call.
    pub(super) async fn call(&self, request: Result<ApiRequest, ClientError>) -> ApiResult {
        match request {
            Ok(request) => self.perform_call(request).await,
            Err(err) => {
                tracing::warn!(
                    code = err.code(),
                    error = %err,
                    "Coinify API request could not be built"
                );
                self.record_error(&err);
                Err(err)
            }
        }
    }

    async fn dispatch(&self, request: &ApiRequest) -> ApiResult {
        let url = self.request_url(request)?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            authenticated = request.authenticated,
            "Dispatching Coinify API call"
        );

        let mut builder = self.http.request(request.method.into(), url);
        if request.authenticated {
            builder = builder.header(AUTHORIZATION, self.authorization_header());
        }
        if request.method != HttpMethod::Get {
            builder = builder.json(&request.body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(payload) => Ok(payload),
            Err(err) => {
                tracing::debug!(%status, error = %err, "Coinify response body is not JSON");
                Ok(serde_json::Value::Null)
            }
        }
    }

    fn request_url(&self, request: &ApiRequest) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))?;
        if !request.query.is_empty() {
            url.set_query(Some(&build_query(&request.query)));
        }
        Ok(url)
    }

    fn record_error(&self, err: &ClientError) {
        if let Ok(mut slot) = self.last_error.lock() {
            *slot = Some(LastError {
                message: err.message(),
                code: err.code(),
            });
        }
    }
}
