//! Client SDK for the Coinify merchant API.
//!
//! * [`client::CoinifyClient`] signs and sends API calls (feature `client`).
//! * [`callback::CallbackVerifier`] authenticates inbound callbacks.
//!
//! The two halves share no state; a webhook receiver can depend on this
//! crate with `default-features = false` and only get the verifier.

pub mod callback;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod query;
pub mod signature;

pub use callback::{CALLBACK_SIGNATURE_HEADER, CallbackError, CallbackVerifier};
#[cfg(feature = "client")]
pub use client::{ApiRequest, ApiResult, ClientError, CoinifyClient, HttpMethod};
pub use config::ClientConfig;
