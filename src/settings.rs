use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Default export format when none is configured.
pub const DEFAULT_FORMAT: &str = "csv";

#[derive(Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    pub watch_folder: Option<String>,
    pub output_dir: Option<String>,
    pub export_format: Option<String>,
}

pub fn get_settings_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("obramat").join("settings.json")
}

pub fn load_settings() -> AppSettings {
    let path = get_settings_path();
    if path.exists() {
        fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        AppSettings::default()
    }
}

pub fn save_settings(settings: &AppSettings) -> AppResult<()> {
    let path = get_settings_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_set() {
        assert!(!DEFAULT_FORMAT.is_empty());
    }

    #[test]
    fn settings_round_trip_as_json() {
        let settings = AppSettings {
            watch_folder: Some("/obra/pdfs".to_string()),
            output_dir: None,
            export_format: Some("xlsx".to_string()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.watch_folder.as_deref(), Some("/obra/pdfs"));
        assert_eq!(parsed.export_format.as_deref(), Some("xlsx"));
        assert!(parsed.output_dir.is_none());
    }

    #[test]
    fn settings_path_is_under_app_dir() {
        let path = get_settings_path();
        assert!(path.ends_with("obramat/settings.json"));
    }
}
