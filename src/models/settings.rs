// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Host preferences, persisted as JSON between runs.

use serde::{Deserialize, Serialize};

/// Bounds for the default per-question timer, in seconds.
pub const TIMER_RANGE: std::ops::RangeInclusive<u32> = 10..=120;

pub const LANGUAGES: [&str; 4] = ["English", "Spanish", "French", "German"];
pub const THEMES: [&str; 6] = ["purple", "blue", "teal", "green", "orange", "pink"];
pub const AUDIO_INPUTS: [&str; 3] = [
    "Default Microphone",
    "Built-in Microphone",
    "External USB Microphone",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub dark_mode: bool,
    pub default_timer_secs: u32,
    pub auto_launch: bool,
    pub screenshot_detection: bool,
    pub audio_input: String,
    pub theme: String,
    pub notifications: bool,
    pub auto_save: bool,
    pub language: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            default_timer_secs: 30,
            auto_launch: true,
            screenshot_detection: true,
            audio_input: "Default Microphone".into(),
            theme: "purple".into(),
            notifications: true,
            auto_save: true,
            language: "English".into(),
        }
    }
}

impl HostSettings {
    /// Clamp out-of-range values that may come from a hand-edited file.
    pub fn normalized(mut self) -> Self {
        self.default_timer_secs = self
            .default_timer_secs
            .clamp(*TIMER_RANGE.start(), *TIMER_RANGE.end());
        self
    }
}
