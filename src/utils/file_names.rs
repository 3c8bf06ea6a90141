// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Produce safe file names for exported reports.

use std::path::PathBuf;

/// Turn a display name into a lowercase, filesystem-safe file stem.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Zoë" → "Zoe").
/// - Keep ASCII alphanumerics and `-`; everything else becomes `_`.
/// - Collapse runs of `_` and trim them from both ends.
/// - Fall back to `fallback` when nothing is left.
pub fn file_stem_for(value: &str, fallback: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());

    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps an existing matching extension (case-insensitive); otherwise replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}
