//! Persistence for user preferences.
//!
//! Saves and loads `PersistedState` as JSON in the platform-standard
//! configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::types::PersistedState;

/// Default path of the persisted-state file.
pub fn default_state_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fleet-tui", "fleet-tui")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.config_dir().join("state.json"))
}

/// Manages loading and saving user preferences to disk.
pub struct ConfigManager {
    state_path: PathBuf,
}

impl ConfigManager {
    /// Create a manager using the platform-standard config directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            state_path: default_state_path()?,
        })
    }

    /// Create a manager backed by an explicit path.
    pub fn with_path(state_path: PathBuf) -> Self {
        Self { state_path }
    }

    /// Path of the persisted-state file.
    pub fn state_path(&self) -> &PathBuf {
        &self.state_path
    }

    /// Load persisted state from disk.
    ///
    /// Returns default state if the file doesn't exist or cannot be
    /// parsed.
    pub fn load(&self) -> PersistedState {
        match self.load_inner() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    path = %self.state_path.display(),
                    error = %e,
                    "Failed to load persisted state, using defaults"
                );
                PersistedState::default()
            }
        }
    }

    fn load_inner(&self) -> Result<PersistedState> {
        let content = std::fs::read_to_string(&self.state_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save persisted state to disk, creating parent directories as
    /// needed.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.state_path, content)
            .with_context(|| format!("Failed to write {}", self.state_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorTheme;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("state.json"));
        let state = manager.load();
        assert_eq!(state.selected_theme, ColorTheme::Default);
        assert!(state.last_route.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested/state.json"));

        let state = PersistedState {
            selected_theme: ColorTheme::HighContrast,
            last_route: Some("/analytics".to_string()),
        };
        manager.save(&state).unwrap();

        let loaded = manager.load();
        assert_eq!(loaded.selected_theme, ColorTheme::HighContrast);
        assert_eq!(loaded.last_route.as_deref(), Some("/analytics"));
    }

    #[test]
    fn test_corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let manager = ConfigManager::with_path(path);
        let state = manager.load();
        assert_eq!(state.selected_theme, ColorTheme::Default);
    }
}
