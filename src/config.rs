// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Runtime configuration: join reference values, simulated latencies, and file locations.
//!
//! Everything has a built-in default. A JSON file named by `POLLPULSE_CONFIG`
//! may override any subset of fields; `POLLPULSE_ROOM` pre-fills the join form.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "POLLPULSE_CONFIG";
/// Environment variable carrying a room code to pre-fill on the join form.
pub const ROOM_ENV: &str = "POLLPULSE_ROOM";

/// Reference values the access verifier compares a join request against.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JoinPolicy {
    /// Substring an email must contain to count as a registered participant.
    pub accepted_email_domain: String,
    /// The only room code currently open for joining.
    pub room_code: String,
}

impl Default for JoinPolicy {
    fn default() -> Self {
        Self {
            accepted_email_domain: "@student.edu".into(),
            room_code: "742193".into(),
        }
    }
}

/// Fixed delays standing in for network round-trips, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub launch_ms: u64,
    pub auth_ms: u64,
    pub validation_ms: u64,
    pub success_hold_ms: u64,
    pub question_arrival_ms: u64,
    pub result_reveal_ms: u64,
    pub generation_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            launch_ms: 3000,
            auth_ms: 1000,
            validation_ms: 2000,
            success_hold_ms: 1500,
            question_arrival_ms: 2000,
            result_reveal_ms: 500,
            generation_ms: 1500,
        }
    }
}

impl Timings {
    /// All delays set to zero; used by tests to run commands instantly.
    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            launch_ms: 0,
            auth_ms: 0,
            validation_ms: 0,
            success_hold_ms: 0,
            question_arrival_ms: 0,
            result_reveal_ms: 0,
            generation_ms: 0,
        }
    }

    pub fn launch(&self) -> Duration {
        Duration::from_millis(self.launch_ms)
    }
}

/// Top-level application configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub join: JoinPolicy,
    pub timings: Timings,
    /// Where host settings are persisted.
    pub settings_path: PathBuf,
    /// Room code pre-filled on the join form, if any.
    pub prefill_room_code: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            join: JoinPolicy::default(),
            timings: Timings::default(),
            settings_path: PathBuf::from("pollpulse-settings.json"),
            prefill_room_code: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// A missing `POLLPULSE_CONFIG` is normal; an unreadable or malformed file
    /// is logged and ignored so the client still starts.
    pub fn load() -> Self {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)).unwrap_or_else(|err| {
                warn!("{CONFIG_ENV} could not be applied, using defaults: {err:#}");
                Self::default()
            }),
            None => {
                info!("{CONFIG_ENV} not set, using default configuration");
                Self::default()
            }
        };

        if let Ok(code) = std::env::var(ROOM_ENV) {
            info!("Pre-filling room code from {ROOM_ENV}");
            config.prefill_room_code = Some(code);
        }

        config
    }

    /// Parse a JSON configuration file; absent fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
