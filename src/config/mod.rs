//! Configuration module for countryvis-rs
//!
//! Handles persistent application state: the last opened dataset, the
//! last active selection and UI preferences. State is stored as JSON in
//! the platform-appropriate data directory:
//!
//! - **Linux**: `~/.local/share/dev.hxyulin.countryvis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.countryvis-rs/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.countryvis-rs\`
//!
//! Project-level configuration does not exist here: the dashboard's only
//! input is the dataset file, and everything else is derived from it at
//! startup.

use crate::error::{CountryVisError, Result};
use crate::types::Selection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.countryvis-rs";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        CountryVisError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            CountryVisError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Persistent application state
///
/// Stores user preferences and history that persist across sessions.
/// Everything here is a convenience; the app runs fine from defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default)]
    pub version: u32,

    /// Path of the last opened dataset file
    #[serde(default)]
    pub last_dataset_path: Option<PathBuf>,

    /// The selection active when the app last exited
    #[serde(default)]
    pub last_selection: Option<Selection>,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            CountryVisError::Config("Could not determine app state path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| CountryVisError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CountryVisError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        let path = dir.join(APP_STATE_FILE);

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CountryVisError::Serialization(e.to_string()))?;

        std::fs::write(&path, content)
            .map_err(|e| CountryVisError::Config(format!("Failed to write app state: {}", e)))
    }

    /// Remember the dataset that was just opened
    pub fn set_dataset_path(&mut self, path: impl AsRef<Path>) {
        self.last_dataset_path = Some(path.as_ref().to_path_buf());
    }

    /// Get the remembered dataset path if the file still exists
    pub fn get_dataset_path(&self) -> Option<&Path> {
        self.last_dataset_path
            .as_ref()
            .filter(|p| p.exists())
            .map(|p| p.as_path())
    }
}
