//! Application state shared across all request handlers.

use coinify_sdk::CallbackVerifier;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Callback verifier (can be replaced via SIGHUP).
    pub verifier: Arc<RwLock<CallbackVerifier>>,
}

impl AppState {
    pub fn new(verifier: CallbackVerifier) -> Self {
        Self {
            verifier: Arc::new(RwLock::new(verifier)),
        }
    }

    /// Get a read lock on the verifier.
    pub async fn verifier(&self) -> tokio::sync::RwLockReadGuard<'_, CallbackVerifier> {
        self.verifier.read().await
    }

    /// Replace the verifier (used during SIGHUP reload).
    pub async fn update_verifier(&self, verifier: CallbackVerifier) {
        let mut current = self.verifier.write().await;
        *current = verifier;
    }
}
