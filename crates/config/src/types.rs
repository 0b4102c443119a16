//! Configuration types for the Fleet TUI.

use ratatui::style::Color;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Module for serializing an optional SecretString as a plain string.
mod opt_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret().to_string())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Module for serializing Duration as whole seconds.
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the fleet backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the backend, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Request timeout.
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

/// Resolved application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    /// Optional static bearer token sent with every request.
    #[serde(with = "opt_secret_string", default)]
    pub api_token: Option<SecretString>,
}

impl Config {
    /// Display string for the auth mode shown in the TUI header.
    pub fn auth_mode(&self) -> &'static str {
        if self.api_token.is_some() {
            "token"
        } else {
            "open"
        }
    }
}

/// Selectable color theme (persisted across runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorTheme {
    #[default]
    Default,
    HighContrast,
}

impl ColorTheme {
    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::HighContrast,
            Self::HighContrast => Self::Default,
        }
    }
}

/// Expanded runtime theme derived from a `ColorTheme`.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl From<ColorTheme> for Theme {
    fn from(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                text: Color::Reset,
                text_dim: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Gray,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
            },
            ColorTheme::HighContrast => Self {
                text: Color::White,
                text_dim: Color::Gray,
                accent: Color::Yellow,
                border: Color::White,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightBlue,
            },
        }
    }
}

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersistedState {
    /// Currently selected color theme.
    #[serde(default)]
    pub selected_theme: ColorTheme,
    /// Route path active when the application last quit.
    #[serde(default)]
    pub last_route: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_auth_mode() {
        let open = Config {
            connection: ConnectionConfig {
                base_url: "http://localhost:5000".to_string(),
                timeout: default_timeout(),
            },
            api_token: None,
        };
        assert_eq!(open.auth_mode(), "open");

        let token = Config {
            api_token: Some(SecretString::new("t".to_string().into())),
            ..open
        };
        assert_eq!(token.auth_mode(), "token");
    }

    #[test]
    fn test_config_serde_round_trip() {
        let json = r#"{
            "connection": {"base_url": "http://fleet:5000", "timeout": 10},
            "api_token": "secret-token"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.connection.base_url, "http://fleet:5000");
        assert_eq!(config.connection.timeout, Duration::from_secs(10));
        assert_eq!(
            config.api_token.as_ref().unwrap().expose_secret(),
            "secret-token"
        );

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["connection"]["timeout"], 10);
        assert_eq!(back["api_token"], "secret-token");
    }

    #[test]
    fn test_config_timeout_defaults_when_absent() {
        let json = r#"{"connection": {"base_url": "http://fleet:5000"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.connection.timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_color_theme_cycles() {
        assert_eq!(ColorTheme::Default.next(), ColorTheme::HighContrast);
        assert_eq!(ColorTheme::HighContrast.next(), ColorTheme::Default);
    }

    #[test]
    fn test_persisted_state_defaults() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.selected_theme, ColorTheme::Default);
        assert!(state.last_route.is_none());
    }
}
