// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Participant roster model with search and sort helpers.

use std::cmp::Ordering;

use time::{Date, macros::date};

/// Coarse accuracy band used to colour statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyTier {
    High,
    Medium,
    Low,
}

impl AccuracyTier {
    /// ≥ 90 is high, ≥ 80 is medium, anything else low.
    pub fn from_percent(accuracy: u8) -> Self {
        match accuracy {
            90.. => Self::High,
            80..=89 => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantStatus {
    Active,
    Inactive,
}

impl ParticipantStatus {
    pub fn label(self) -> &'static str {
        match self {
            ParticipantStatus::Active => "active",
            ParticipantStatus::Inactive => "inactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Share of correct answers in percent.
    pub accuracy: u8,
    pub avg_time_secs: f32,
    pub polls_attempted: u32,
    pub joined_at: Date,
    pub status: ParticipantStatus,
    pub last_active: String,
}

/// Column the roster is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    Name,
    #[default]
    Accuracy,
    AvgTime,
    PollsAttempted,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Accuracy,
        SortKey::AvgTime,
        SortKey::PollsAttempted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Accuracy => "Accuracy",
            SortKey::AvgTime => "Avg time",
            SortKey::PollsAttempted => "Polls attempted",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Participant {
    /// Case-insensitive substring match on name or email. An empty term matches everyone.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }

    fn compare(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            SortKey::Accuracy => self.accuracy.cmp(&other.accuracy),
            SortKey::AvgTime => self.avg_time_secs.total_cmp(&other.avg_time_secs),
            SortKey::PollsAttempted => self.polls_attempted.cmp(&other.polls_attempted),
        }
    }
}

/// Filter by search term, then order by the chosen column.
pub fn visible_participants<'a>(
    participants: &'a [Participant],
    term: &str,
    key: SortKey,
    order: SortOrder,
) -> Vec<&'a Participant> {
    let mut rows: Vec<&Participant> = participants.iter().filter(|p| p.matches(term)).collect();
    rows.sort_by(|a, b| {
        let ord = a.compare(b, key);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    rows
}

pub fn sample_participants() -> Vec<Participant> {
    vec![
        Participant {
            id: "1".into(),
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            accuracy: 92,
            avg_time_secs: 2.3,
            polls_attempted: 15,
            joined_at: date!(2024 - 01 - 15),
            status: ParticipantStatus::Active,
            last_active: "2 minutes ago".into(),
        },
        Participant {
            id: "2".into(),
            name: "Bob Smith".into(),
            email: "bob@example.com".into(),
            accuracy: 87,
            avg_time_secs: 3.1,
            polls_attempted: 12,
            joined_at: date!(2024 - 01 - 14),
            status: ParticipantStatus::Active,
            last_active: "5 minutes ago".into(),
        },
        Participant {
            id: "3".into(),
            name: "Carol Davis".into(),
            email: "carol@example.com".into(),
            accuracy: 95,
            avg_time_secs: 1.8,
            polls_attempted: 18,
            joined_at: date!(2024 - 01 - 13),
            status: ParticipantStatus::Inactive,
            last_active: "1 hour ago".into(),
        },
        Participant {
            id: "4".into(),
            name: "David Wilson".into(),
            email: "david@example.com".into(),
            accuracy: 78,
            avg_time_secs: 4.2,
            polls_attempted: 8,
            joined_at: date!(2024 - 01 - 16),
            status: ParticipantStatus::Active,
            last_active: "1 minute ago".into(),
        },
    ]
}
