//! Callback (IPN) handler.
//!
//! # Endpoints
//!
//! - `POST {callback.path}` – receive a signed Coinify callback

use axum::{Json, Router, response::IntoResponse, routing::post};
use serde::Serialize;

use crate::api::extractors::VerifiedCallback;
use crate::state::AppState;

/// Build the callback router, mounted at `path`.
pub fn router(path: &str) -> Router<AppState> {
    Router::new().route(path, post(receive_callback))
}

/// Acknowledgement returned to Coinify.
#[derive(Serialize)]
struct CallbackAck {
    status: &'static str,
}

/// Accept a verified callback and record it.
async fn receive_callback(VerifiedCallback(payload): VerifiedCallback) -> impl IntoResponse {
    tracing::info!(
        event = %payload.event,
        time = payload.time.as_deref().unwrap_or("-"),
        object_id = payload.object_id(),
        state = payload.state(),
        "Accepted Coinify callback"
    );

    Json(CallbackAck { status: "accepted" })
}
