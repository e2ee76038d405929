//! Client configuration.
//!
//! [`ClientConfig`] is `Deserialize` so applications can embed it in their
//! own configuration files; [`CoinifyClient::from_config`] turns it into a
//! ready client.
//!
//! [`CoinifyClient::from_config`]: crate::client::CoinifyClient::from_config

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.coinify.com";

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a [`CoinifyClient`](crate::client::CoinifyClient).
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_secret: SecretString,
    /// Override of [`DEFAULT_BASE_URL`], e.g. for a sandbox.
    #[serde(default)]
    pub base_url: Option<Url>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            base_url: None,
            timeout_secs: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, |url| url.as_str())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_key": "key", "api_secret": "hunter2"}"#).unwrap();
        assert_eq!(config.base_url(), "https://api.coinify.com");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn test_secret_is_wrapped() {
        use secrecy::ExposeSecret;

        let config: ClientConfig =
            serde_json::from_str(r#"{"api_key": "key", "api_secret": "hunter2"}"#).unwrap();
        assert_eq!(config.api_secret.expose_secret(), "hunter2");

        let built = ClientConfig::new("key", "hunter2");
        assert_eq!(built.api_secret.expose_secret(), "hunter2");
        assert!(!format!("{built:?}").contains("hunter2"));
    }

    #[test]
    fn test_overrides() {
        let config: ClientConfig = serde_json::from_str(
            r#"{
                "api_key": "key",
                "api_secret": "secret",
                "base_url": "https://sandbox.example.com",
                "timeout_secs": 5
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://sandbox.example.com/");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
