//! HTTP client for the Coinify API.
//!
//! Gated behind the `client` cargo feature so crates that only verify
//! callbacks do not pull in `reqwest`.

mod account;
mod buy_orders;
mod coinify;
mod invoices;

pub use coinify::{CoinifyClient, LastError};

use serde::Serialize;

use crate::objects::Params;

/// Outcome of a single API call.
///
/// `Ok` carries the decoded JSON body exactly as the API sent it, including
/// the API's own success/error envelope. `Err` means no usable response was
/// received.
pub type ApiResult = Result<serde_json::Value, ClientError>;

/// Errors produced by the SDK HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL and path do not form a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Request parameters did not serialize to a JSON object.
    #[error("request parameters must serialize to a JSON object")]
    InvalidParams,
}

impl ClientError {
    /// Human-readable description of the failure.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short, stable classification of the failure.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Http(e) if e.is_timeout() => "timeout",
            ClientError::Http(e) if e.is_connect() => "connect",
            ClientError::Http(e) if e.is_redirect() => "redirect",
            ClientError::Http(e) if e.is_body() => "body",
            ClientError::Http(e) if e.is_decode() => "decode",
            ClientError::Http(e) if e.is_builder() => "builder",
            ClientError::Http(e) if e.is_request() => "request",
            ClientError::Http(_) => "http",
            ClientError::Json(_) => "json",
            ClientError::Url(_) => "url",
            ClientError::InvalidParams => "params",
        }
    }
}

/// HTTP methods the Coinify API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
        }
    }
}

/// One call to the API, as handed to [`CoinifyClient::perform_call`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Path with leading slash, e.g. `/v3/invoices`.
    pub path: String,
    pub method: HttpMethod,
    /// JSON body. Never sent with `GET`.
    pub body: Params,
    pub query: Params,
    pub authenticated: bool,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: Params::new(),
            query: Params::new(),
            authenticated: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Sign this request with the client's credentials.
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }

    pub fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = to_params(body)?;
        Ok(self)
    }

    pub fn with_query<T: Serialize>(mut self, query: &T) -> Result<Self, ClientError> {
        self.query = to_params(query)?;
        Ok(self)
    }
}

fn to_params<T: Serialize>(value: &T) -> Result<Params, ClientError> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(Params::new()),
        _ => Err(ClientError::InvalidParams),
    }
}
