// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Participant report export.
//!
//! Responsibilities:
//! - Suggest a safe file name from the participant's display name.
//! - Serialize a participant's statistics, with a generation timestamp, to JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::models::participant::{AccuracyTier, Participant};
use crate::utils::file_stem_for;

/// JSON document written for one participant.
#[derive(Debug, Serialize)]
struct ParticipantReport<'a> {
    generated_at: String,
    id: &'a str,
    name: &'a str,
    email: &'a str,
    status: &'static str,
    joined_at: String,
    last_active: &'a str,
    polls_attempted: u32,
    accuracy_percent: u8,
    accuracy_tier: &'static str,
    avg_response_secs: f32,
}

/// Suggest a report file name such as `alice_johnson_report.json`.
pub fn suggested_report_name(participant: &Participant) -> String {
    format!("{}_report.json", file_stem_for(&participant.name, "participant"))
}

/// Write the report for `participant` to `output`, creating parent directories.
pub fn write_participant_report(
    output: &Path,
    participant: &Participant,
    generated_at: OffsetDateTime,
) -> Result<()> {
    let generated_at = generated_at
        .format(&Rfc3339)
        .map_err(|err| anyhow::anyhow!("Failed to format report timestamp: {}", err))?;

    let report = ParticipantReport {
        generated_at,
        id: &participant.id,
        name: &participant.name,
        email: &participant.email,
        status: participant.status.label(),
        joined_at: participant.joined_at.to_string(),
        last_active: &participant.last_active,
        polls_attempted: participant.polls_attempted,
        accuracy_percent: participant.accuracy,
        accuracy_tier: match AccuracyTier::from_percent(participant.accuracy) {
            AccuracyTier::High => "high",
            AccuracyTier::Medium => "medium",
            AccuracyTier::Low => "low",
        },
        avg_response_secs: participant.avg_time_secs,
    };

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    fs::write(output, json)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    log::info!("Exported report for {} to {}", participant.name, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::participant::sample_participants;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn suggested_name_uses_sanitized_display_name() {
        let alice = &sample_participants()[0];
        assert_eq!(suggested_report_name(alice), "alice_johnson_report.json");
    }

    #[test]
    fn report_contains_statistics_and_timestamp() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out").join("carol.json");
        let carol = &sample_participants()[2];

        write_participant_report(&output, carol, OffsetDateTime::UNIX_EPOCH).unwrap();

        let json: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["name"], "Carol Davis");
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["joined_at"], "2024-01-13");
        assert_eq!(json["accuracy_percent"], 95);
        assert_eq!(json["accuracy_tier"], "high");
        assert_eq!(json["generated_at"], "1970-01-01T00:00:00Z");
    }
}
