//! Verification of inbound Coinify callbacks (IPN).
//!
//! Coinify signs the raw JSON body of every callback with
//! `HMAC-SHA256(body, callback_secret)` and sends the lowercase hex digest in
//! the [`CALLBACK_SIGNATURE_HEADER`] header. Verification must run on the
//! body exactly as received, before any JSON decoding.

use ring::hmac;

use crate::objects::CallbackPayload;

/// Header carrying the callback signature.
pub const CALLBACK_SIGNATURE_HEADER: &str = "X-Coinify-Callback-Signature";

/// Errors produced by [`CallbackVerifier::verify_and_parse`].
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("missing callback signature")]
    MissingSignature,
    #[error("invalid callback signature")]
    InvalidSignature,
    #[error("invalid callback json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Checks callback signatures against a shared callback secret.
///
/// Only the derived HMAC key is kept; the secret itself is not retained.
#[derive(Debug, Clone)]
pub struct CallbackVerifier {
    key: hmac::Key,
}

impl CallbackVerifier {
    pub fn new(callback_secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, callback_secret.as_ref()),
        }
    }

    /// Returns `true` iff `claimed_signature` is the hex HMAC of `raw_payload`.
    ///
    /// Hex digits are accepted in either case. A missing, malformed or
    /// wrong-length signature yields `false`, and so does one padded with
    /// whitespace. The digest comparison is
    /// constant-time.
    pub fn verify(&self, raw_payload: &[u8], claimed_signature: Option<&str>) -> bool {
        let Some(claimed) = claimed_signature else {
            return false;
        };
        let Ok(claimed) = hex::decode(claimed) else {
            return false;
        };
        hmac::verify(&self.key, raw_payload, &claimed).is_ok()
    }

    /// Lowercase hex signature Coinify would send for `raw_payload`.
    pub fn expected_signature(&self, raw_payload: &[u8]) -> String {
        hex::encode(hmac::sign(&self.key, raw_payload).as_ref())
    }

    /// Verify the signature, then decode the payload.
    ///
    /// The body is only parsed once the signature has been accepted.
    pub fn verify_and_parse(
        &self,
        raw_payload: &[u8],
        claimed_signature: Option<&str>,
    ) -> Result<CallbackPayload, CallbackError> {
        if claimed_signature.is_none() {
            return Err(CallbackError::MissingSignature);
        }
        if !self.verify(raw_payload, claimed_signature) {
            tracing::debug!(len = raw_payload.len(), "Rejected callback with bad signature");
            return Err(CallbackError::InvalidSignature);
        }
        Ok(serde_json::from_slice(raw_payload)?)
    }
}
