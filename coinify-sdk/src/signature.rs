//! Request signing for the Coinify API.
//!
//! Every authenticated call carries an `Authorization` header of the form:
//!
//! ```text
//! Authorization: Coinify apikey="{api_key}", nonce="{nonce}", signature="{signature}"
//! ```
//!
//! where `signature` is the lowercase hex encoding of
//! `HMAC-SHA256("{nonce}{api_key}", api_secret)` and `nonce` is the current
//! wall-clock time in microseconds since the Unix epoch.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use ring::hmac;
use secrecy::{ExposeSecret, SecretString};

/// Authorization scheme name placed in front of the header parameters.
pub const AUTH_SCHEME: &str = "Coinify";

/// API key and secret used to sign requests.
///
/// The secret is wrapped in [`SecretString`] so it is zeroed on drop and
/// never shows up in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Build credentials from a secret that is already wrapped.
    pub fn from_secret(api_key: impl Into<String>, api_secret: SecretString) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret,
        }
    }

    /// The public API key. Sent in cleartext as part of the header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn secret_bytes(&self) -> &[u8] {
        self.api_secret.expose_secret().as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Nonce
// ---------------------------------------------------------------------------

/// A request nonce: microseconds since the Unix epoch.
///
/// Rendered as the integer seconds immediately followed by the six-digit,
/// zero-padded microsecond component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nonce(u64);

impl Nonce {
    /// Nonce for the current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(time::OffsetDateTime::now_utc())
    }

    /// Nonce for a given instant. Both components come from the same read.
    pub fn from_datetime(at: time::OffsetDateTime) -> Self {
        let secs = u64::try_from(at.unix_timestamp()).unwrap_or(0);
        Self(secs * 1_000_000 + u64::from(at.microsecond()))
    }

    pub fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing nonces.
///
/// When the clock has not advanced past the last issued nonce (two calls in
/// the same microsecond, or the clock stepping backwards) the next nonce is
/// `last + 1`.
#[derive(Debug, Default)]
pub struct NonceSequence {
    last: AtomicU64,
}

impl NonceSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Nonce {
        self.next_after(Nonce::now())
    }

    fn next_after(&self, now: Nonce) -> Nonce {
        let step = |last: u64| if now.0 > last { now.0 } else { last + 1 };
        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(step(last)))
        {
            Ok(prev) | Err(prev) => Nonce(step(prev)),
        }
    }
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Lowercase hex `HMAC-SHA256(message, key)`.
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> String {
    let tag = hmac::sign(&hmac::Key::new(hmac::HMAC_SHA256, key), message);
    hex::encode(tag.as_ref())
}

/// Sign `"{nonce}{api_key}"` with the API secret.
pub fn request_signature(credentials: &Credentials, nonce: Nonce) -> String {
    let message = format!("{nonce}{}", credentials.api_key());
    hmac_sha256_hex(credentials.secret_bytes(), message.as_bytes())
}

/// Build the full `Authorization` header value for `nonce`.
pub fn sign_request(credentials: &Credentials, nonce: Nonce) -> String {
    let signature = request_signature(credentials, nonce);
    format!(
        "{AUTH_SCHEME} apikey=\"{}\", nonce=\"{nonce}\", signature=\"{signature}\"",
        credentials.api_key()
    )
}
