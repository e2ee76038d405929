//! Custom Axum extractors for callback authentication.
//!
//! `VerifiedCallback` checks the `X-Coinify-Callback-Signature` header
//! against the raw request body before decoding it. All cryptographic
//! operations are delegated to [`coinify_sdk::callback`].

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coinify_sdk::callback::{CALLBACK_SIGNATURE_HEADER, CallbackError};
use coinify_sdk::objects::CallbackPayload;

use crate::state::AppState;

/// Largest callback body accepted.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// An Axum extractor yielding a callback payload whose signature has been
/// verified against the configured callback secret.
pub struct VerifiedCallback(pub CallbackPayload);

/// Reasons a callback is refused.
#[derive(Debug, thiserror::Error)]
pub enum CallbackRejection {
    #[error("missing X-Coinify-Callback-Signature header")]
    MissingHeader,
    #[error("failed to read request body")]
    BodyReadError,
    #[error("signature verification failed")]
    VerificationFailed,
    #[error("invalid JSON body: {0}")]
    JsonError(serde_json::Error),
}

impl From<CallbackError> for CallbackRejection {
    fn from(err: CallbackError) -> Self {
        match err {
            CallbackError::MissingSignature => Self::MissingHeader,
            CallbackError::InvalidSignature => Self::VerificationFailed,
            CallbackError::Json(e) => Self::JsonError(e),
        }
    }
}

impl IntoResponse for CallbackRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CallbackRejection::MissingHeader => (
                StatusCode::UNAUTHORIZED,
                "missing X-Coinify-Callback-Signature header",
            ),
            CallbackRejection::BodyReadError => {
                (StatusCode::BAD_REQUEST, "failed to read request body")
            }
            CallbackRejection::VerificationFailed => {
                tracing::warn!("Rejected callback with invalid signature");
                (StatusCode::UNAUTHORIZED, "signature verification failed")
            }
            CallbackRejection::JsonError(e) => {
                tracing::warn!(error = %e, "Signed callback body is not valid JSON");
                (StatusCode::BAD_REQUEST, "invalid JSON body")
            }
        };
        (status, message).into_response()
    }
}

impl FromRequest<AppState> for VerifiedCallback {
    type Rejection = CallbackRejection;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        // A header that is not visible ASCII cannot be a hex digest; treat it
        // like a wrong signature rather than a missing one.
        let signature = match req.headers().get(CALLBACK_SIGNATURE_HEADER) {
            None => None,
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| CallbackRejection::VerificationFailed)?
                    .to_owned(),
            ),
        };

        let body: bytes::Bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|_| CallbackRejection::BodyReadError)?;

        let verifier = state.verifier().await;
        let payload = verifier.verify_and_parse(&body, signature.as_deref())?;
        drop(verifier);

        Ok(VerifiedCallback(payload))
    }
}
