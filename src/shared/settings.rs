use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::core::engine::{Unit, UnitCategory};
use crate::shared::errors::{ConverterError, ConverterResult};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConverterSettings {
    pub preferences: DisplayPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayPreferences {
    pub default_category: UnitCategory,
    pub default_from_unit: Unit,
    pub default_to_unit: Unit,
    pub decimal_places: usize,
    pub recent_list_len: usize,
    pub trend_window_len: usize,
    pub show_comparisons: bool,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            preferences: DisplayPreferences {
                default_category: UnitCategory::Length,
                default_from_unit: Unit::Meters,
                default_to_unit: Unit::Feet,
                decimal_places: 4,
                recent_list_len: 5,
                trend_window_len: 10,
                show_comparisons: true,
            },
        }
    }
}

impl ConverterSettings {
    pub fn settings_path() -> ConverterResult<PathBuf> {
        ProjectDirs::from("com", "widgets", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| ConverterError::Io("Failed to determine config directory".to_string()))
    }

    pub fn load() -> ConverterResult<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save()?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConverterError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| ConverterError::Io(format!("Failed to parse settings: {}", e)))
    }

    /// Load from disk, falling back to defaults if the file is missing
    /// or unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load settings, using defaults");
            Self::default()
        })
    }

    pub fn save(&self) -> ConverterResult<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConverterError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConverterError::Io(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| ConverterError::Io(format!("Failed to write settings file: {}", e)))
    }
}
