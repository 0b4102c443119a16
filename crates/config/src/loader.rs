//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and
//!   an optional JSON profile file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical merging.
//!
//! Invariants:
//! - Builder overrides (CLI) take precedence over environment
//!   variables, which take precedence over the profile file.
//! - `load_dotenv()` must be called explicitly to enable `.env`
//!   loading; the `DOTENV_DISABLED` variable suppresses it.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_API_TOKEN, ENV_BASE_URL, ENV_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },
}

/// Load `.env` into the process environment unless disabled.
///
/// Missing `.env` files are not an error.
pub fn load_dotenv() {
    if std::env::var("DOTENV_DISABLED").is_ok() {
        return;
    }
    let _ = dotenvy::dotenv();
}

/// Values a profile file may provide (all optional).
#[derive(Debug, serde::Deserialize, Default)]
struct ProfileFile {
    base_url: Option<String>,
    api_token: Option<String>,
    timeout_secs: Option<u64>,
}

/// Configuration loader that merges builder overrides, environment
/// variables, and a profile file.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL (highest precedence, from CLI).
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the API token.
    pub fn with_api_token(mut self, token: Option<SecretString>) -> Self {
        self.api_token = token;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Point at a profile file instead of skipping file loading.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Resolve the final configuration.
    pub fn load(self) -> Result<Config, ConfigError> {
        let profile = match &self.config_path {
            Some(path) => read_profile_file(path)?,
            None => ProfileFile::default(),
        };

        let base_url = self
            .base_url
            .or_else(|| std::env::var(ENV_BASE_URL).ok())
            .or(profile.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let base_url = validate_base_url(base_url)?;

        let api_token = self
            .api_token
            .or_else(|| {
                std::env::var(ENV_API_TOKEN)
                    .ok()
                    .filter(|t| !t.trim().is_empty())
                    .map(|t| SecretString::new(t.into()))
            })
            .or_else(|| profile.api_token.map(|t| SecretString::new(t.into())));

        let timeout = match self.timeout {
            Some(t) => t,
            None => resolve_timeout(profile.timeout_secs)?,
        };

        Ok(Config {
            connection: ConnectionConfig { base_url, timeout },
            api_token,
        })
    }
}

fn read_profile_file(path: &PathBuf) -> Result<ProfileFile, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
            path: path.clone(),
        })?;
    serde_json::from_str(&content).map_err(|_| ConfigError::ConfigFileParse {
        path: path.clone(),
    })
}

fn validate_base_url(base_url: String) -> Result<String, ConfigError> {
    let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.clone(),
        message: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url,
            message: "scheme must be http or https".to_string(),
        });
    }
    Ok(base_url.trim_end_matches('/').to_string())
}

fn resolve_timeout(profile_secs: Option<u64>) -> Result<Duration, ConfigError> {
    let secs = match std::env::var(ENV_TIMEOUT_SECS) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT_SECS.to_string(),
                message: format!("expected an integer number of seconds, got '{}'", raw),
            })?,
        Err(_) => profile_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidValue {
            var: ENV_TIMEOUT_SECS.to_string(),
            message: format!("must be between 1 and {}", MAX_TIMEOUT_SECS),
        });
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        temp_env::with_vars_unset([ENV_BASE_URL, ENV_API_TOKEN, ENV_TIMEOUT_SECS], || {
            let config = ConfigLoader::new().load().unwrap();
            assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
            assert_eq!(
                config.connection.timeout,
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            );
            assert!(config.api_token.is_none());
        });
    }

    #[test]
    fn test_env_vars_override_defaults() {
        temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("http://fleet.internal:5000/")),
                (ENV_API_TOKEN, Some("tok-123")),
                (ENV_TIMEOUT_SECS, Some("5")),
            ],
            || {
                let config = ConfigLoader::new().load().unwrap();
                // Trailing slash is normalized away
                assert_eq!(config.connection.base_url, "http://fleet.internal:5000");
                assert_eq!(config.connection.timeout, Duration::from_secs(5));
                assert_eq!(config.api_token.unwrap().expose_secret(), "tok-123");
            },
        );
    }

    #[test]
    fn test_builder_overrides_env() {
        temp_env::with_vars([(ENV_BASE_URL, Some("http://from-env:5000"))], || {
            let config = ConfigLoader::new()
                .with_base_url(Some("http://from-cli:5000".to_string()))
                .load()
                .unwrap();
            assert_eq!(config.connection.base_url, "http://from-cli:5000");
        });
    }

    #[test]
    fn test_profile_file_fills_gaps_under_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "http://from-file:5000", "timeout_secs": 7}}"#
        )
        .unwrap();

        temp_env::with_vars_unset([ENV_BASE_URL, ENV_API_TOKEN, ENV_TIMEOUT_SECS], || {
            let config = ConfigLoader::new()
                .with_config_path(Some(file.path().to_path_buf()))
                .load()
                .unwrap();
            assert_eq!(config.connection.base_url, "http://from-file:5000");
            assert_eq!(config.connection.timeout, Duration::from_secs(7));
        });
    }

    #[test]
    fn test_invalid_base_url_scheme_is_rejected() {
        let err = ConfigLoader::new()
            .with_base_url(Some("ftp://fleet:5000".to_string()))
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        temp_env::with_vars([(ENV_TIMEOUT_SECS, Some("zero"))], || {
            let err = ConfigLoader::new().load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
        temp_env::with_vars([(ENV_TIMEOUT_SECS, Some("0"))], || {
            let err = ConfigLoader::new().load().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        });
    }

    #[test]
    fn test_missing_profile_file_is_an_error() {
        let err = ConfigLoader::new()
            .with_config_path(Some(PathBuf::from("/nonexistent/fleet.json")))
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
    }
}
