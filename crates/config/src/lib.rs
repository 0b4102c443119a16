//! Configuration for the Fleet TUI workspace.
//!
//! Handles connection settings (base URL, timeout, optional API
//! token), their resolution from CLI overrides, environment variables,
//! and an optional JSON profile file, plus persisted UI preferences.
//!
//! Precedence (highest to lowest): CLI args > environment variables >
//! profile file > defaults.

pub mod constants;
pub mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, load_dotenv};
pub use persistence::{ConfigManager, default_state_path};
pub use types::{ColorTheme, Config, ConnectionConfig, PersistedState, Theme};
