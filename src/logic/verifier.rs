// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Access verification for join requests.
//!
//! The checks run in a fixed order and the first failure decides the denial:
//! email registration, then room code, then meeting-link format.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::JoinPolicy;
use crate::models::join::{DenialReason, JoinRequest, Verdict};

/// Decides whether a well-formed join request is admitted.
pub trait AccessVerifier: Send + Sync {
    fn verify(&self, request: &JoinRequest) -> Verdict;
}

/// Full meeting URL formats per provider. Stricter than the form's host check.
static MEETING_LINK_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // Google Meet: abc-defg-hij
        Regex::new(r"^https://meet\.google\.com/[a-z]{3}-[a-z]{4}-[a-z]{3}/?(\?\S*)?$"),
        // Zoom: /j/<meeting id>, optionally on a vanity subdomain
        Regex::new(r"^https://([a-z0-9-]+\.)?zoom\.us/j/\d{9,11}/?(\?\S*)?$"),
        // Teams: meetup-join deep links and short meet links
        Regex::new(r"^https://teams\.(microsoft|live)\.com/(l/meetup-join/|meet/)\S+$"),
    ]
    .map(|re| re.expect("meeting link pattern must compile"))
});

/// Whether the link matches one of the accepted provider formats.
pub fn matches_meeting_format(link: &str) -> bool {
    let link = link.trim();
    MEETING_LINK_PATTERNS.iter().any(|re| re.is_match(link))
}

/// Verifier backed by fixed reference values from the configuration.
#[derive(Clone, Debug)]
pub struct ReferenceVerifier {
    policy: JoinPolicy,
}

impl ReferenceVerifier {
    pub fn new(policy: JoinPolicy) -> Self {
        Self { policy }
    }
}

impl AccessVerifier for ReferenceVerifier {
    fn verify(&self, request: &JoinRequest) -> Verdict {
        if !request.email.contains(&self.policy.accepted_email_domain) {
            Verdict::Denied(DenialReason::EmailNotRegistered)
        } else if request.room_code != self.policy.room_code {
            Verdict::Denied(DenialReason::InvalidRoomCode)
        } else if !matches_meeting_format(&request.meeting_link) {
            Verdict::Denied(DenialReason::InvalidMeetingLink)
        } else {
            Verdict::Granted
        }
    }
}
