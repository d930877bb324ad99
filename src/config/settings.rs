//! User settings for rolodex-cli
//!
//! Manages user preferences, currently the width of the upcoming-birthday
//! window.

use serde::{Deserialize, Serialize};

use super::paths::RolodexPaths;
use crate::error::BookError;

/// User settings for rolodex-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many days ahead the `birthdays` command looks (inclusive)
    #[serde(default = "default_window_days")]
    pub upcoming_window_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_window_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_window_days: default_window_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &RolodexPaths) -> Result<Self, BookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BookError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BookError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let the caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RolodexPaths) -> Result<(), BookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
