//! TOML-based user settings.
//!
//! Stored at `~/.config/dayplan/settings.toml`, separate from the day
//! state blob so wiping one does not lose the other.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::SettingsError;

/// User settings.
///
/// Serialized to/from TOML at `~/.config/dayplan/settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display name used by the CLI greeting; empty until set.
    #[serde(default)]
    pub username: String,
}

impl Settings {
    /// Default path of the settings file.
    pub fn path() -> Result<PathBuf, SettingsError> {
        let dir = data_dir().map_err(|e| SettingsError::DataDir(e.to_string()))?;
        Ok(dir.join("settings.toml"))
    }

    /// Load settings from the default path, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| SettingsError::ParseFailed(e.to_string()))
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    /// Save settings to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let raw = toml::to_string_pretty(self).map_err(|e| SettingsError::ParseFailed(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| SettingsError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let settings = Settings {
            username: "Ada".to_string(),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.username, "Ada");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::LoadFailed { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "username = \"Ada\"\nfuture_knob = 3\n").unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.username, "Ada");
    }
}
