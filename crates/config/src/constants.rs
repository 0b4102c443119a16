//! Centralized constants for the Fleet TUI workspace.
//!
//! Default values used across crates to avoid magic number
//! duplication.

/// Default fleet backend base URL (the development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Environment variable naming the backend base URL.
pub const ENV_BASE_URL: &str = "FLEET_BASE_URL";

/// Environment variable carrying the optional API bearer token.
pub const ENV_API_TOKEN: &str = "FLEET_API_TOKEN";

/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FLEET_TIMEOUT_SECS";
