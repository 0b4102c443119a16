//! Command-line argument parsing for fleet-tui.
//!
//! Configuration precedence (highest to lowest):
//! 1. CLI arguments (e.g., --base-url)
//! 2. Environment variables (e.g., FLEET_BASE_URL)
//! 3. Profile file (--config-path)
//! 4. Default values

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for fleet-tui.
#[derive(Debug, Parser)]
#[command(
    name = "fleet-tui",
    about = "Terminal dashboard for the fleet management API",
    version,
    after_help = "Examples:\n  fleet-tui\n  fleet-tui --base-url http://fleet.internal:5000\n  fleet-tui --route /analytics\n  fleet-tui --config-path /etc/fleet-tui/profile.json --fresh\n"
)]
pub struct Cli {
    /// Base URL of the fleet backend
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a JSON profile file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Initial route path (e.g. "/my-fleet"); unknown paths open the
    /// not-found view
    #[arg(long)]
    pub route: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with fresh state, ignoring any persisted preferences
    #[arg(long)]
    pub fresh: bool,
}
