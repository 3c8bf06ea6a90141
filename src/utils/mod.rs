// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Shared helper utilities reused by UI and business logic.

pub mod file_names;
pub mod format;

/// Force a file extension onto a path.
pub use file_names::ensure_extension;
/// Sanitize a display name into a file stem.
pub use file_names::file_stem_for;
pub use format::{format_clock, format_percent, format_secs};
