//! TOML file configuration structures.
//!
//! These structs directly map to the `coinify-callback.toml` file format.

use serde::Deserialize;
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub callback: CallbackConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Callback configuration section.
#[derive(Clone, Deserialize)]
pub struct CallbackConfig {
    /// The IPN secret from the Coinify merchant dashboard. Can be left empty
    /// when `COINIFY_CALLBACK_SECRET` is set.
    #[serde(default)]
    pub secret: String,
    /// Route Coinify posts callbacks to.
    #[serde(default = "default_callback_path")]
    pub path: String,
}

fn default_callback_path() -> String {
    "/callback".to_owned()
}

impl std::fmt::Debug for CallbackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackConfig")
            .field("secret", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[server]
listen = "127.0.0.1:3000"

[callback]
secret = "ipn-secret"
path = "/hooks/coinify"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen.port(), 3000);
        assert_eq!(config.callback.secret, "ipn-secret");
        assert_eq!(config.callback.path, "/hooks/coinify");
    }

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str("[callback]\nsecret = \"s\"\n").unwrap();
        assert_eq!(config.server.listen, default_listen_addr());
        assert_eq!(config.callback.path, "/callback");
        assert!(!format!("{:?}", config.callback).contains("\"s\""));
    }
}
