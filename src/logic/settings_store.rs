// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Load and save host settings as pretty-printed JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::settings::HostSettings;

/// Read settings from `path`. Returns `Ok(None)` when the file does not exist yet.
pub fn load_settings(path: &Path) -> Result<Option<HostSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let settings: HostSettings = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
    Ok(Some(settings.normalized()))
}

/// Settings for startup: saved values when readable, defaults otherwise.
pub fn load_or_default(path: &Path) -> HostSettings {
    match load_settings(path) {
        Ok(Some(settings)) => {
            log::info!("Loaded host settings from {}", path.display());
            settings
        }
        Ok(None) => HostSettings::default(),
        Err(err) => {
            log::warn!("Ignoring saved settings: {err:#}");
            HostSettings::default()
        }
    }
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &HostSettings) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write settings file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn saved_settings_load_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.json");
        let settings = HostSettings {
            default_timer_secs: 75,
            language: "French".into(),
            auto_launch: false,
            ..Default::default()
        };

        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path).unwrap(), Some(settings));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.json");

        assert_eq!(load_settings(&path).unwrap(), None);
        assert_eq!(load_or_default(&path), HostSettings::default());
    }

    #[test]
    fn out_of_range_timer_is_clamped_on_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        std::fs::write(&path, r#"{ "default_timer_secs": 500 }"#).unwrap();

        let loaded = load_settings(&path).unwrap().unwrap();

        assert_eq!(loaded.default_timer_secs, 120);
        assert_eq!(loaded.language, "English");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_settings(&path).is_err());
        assert_eq!(load_or_default(&path), HostSettings::default());
    }
}
