//! Configuration module for coinify-callback.
//!
//! Handles loading configuration from TOML files, CLI arguments,
//! and environment variables.

pub mod file;

use crate::config::file::FileConfig;
use coinify_sdk::CallbackVerifier;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub listen: SocketAddr,
    pub callback_path: String,
    pub verifier: CallbackVerifier,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
    secret_override: Option<String>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(
        config_path: impl AsRef<Path>,
        listen_override: Option<SocketAddr>,
        secret_override: Option<String>,
    ) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
            secret_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI and environment overrides
    /// 3. Validate the configuration
    /// 4. Build the callback verifier
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }
        if let Some(secret) = &self.secret_override {
            file_config.callback.secret = secret.clone();
        }

        self.validate(&file_config)?;

        Ok(LoadedConfig {
            listen: file_config.server.listen,
            verifier: CallbackVerifier::new(&file_config.callback.secret),
            callback_path: file_config.callback.path,
        })
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        if config.callback.secret.is_empty() {
            return Err(ConfigError::ValidationError(
                "callback secret is empty; set [callback] secret or COINIFY_CALLBACK_SECRET"
                    .to_owned(),
            ));
        }
        if !config.callback.path.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "callback path {:?} must start with '/'",
                config.callback.path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "coinify-callback-{}-{name}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_applies_overrides() {
        let path = write_config("overrides", "[callback]\nsecret = \"from-file\"\n");
        let listen: SocketAddr = "127.0.0.1:9999".parse().unwrap();

        let loaded = ConfigLoader::new(&path, Some(listen), Some("s3cr3t".into()))
            .load()
            .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.listen, listen);
        assert_eq!(loaded.callback_path, "/callback");
        assert_eq!(
            loaded.verifier.expected_signature(br#"{"id":42}"#),
            "0650bd780c187ed5905ba338b52dbe97a84a7c6e06077812e5af4a73bbbdd06d"
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        let path = write_config("empty", "[callback]\npath = \"/ipn\"\n");
        let result = ConfigLoader::new(&path, None, None).load();
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_relative_path_rejected() {
        let path = write_config("relative", "[callback]\nsecret = \"s\"\npath = \"ipn\"\n");
        let result = ConfigLoader::new(&path, None, None).load();
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::new("/nonexistent/coinify-callback.toml", None, None).load();
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
