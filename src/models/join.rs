// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 PollPulse contributors

//! Join request domain model and the local form guard (UI-agnostic).
//!
//! The guard only checks that fields are present and well-shaped. Whether the
//! request is actually admitted is decided later by an
//! [`AccessVerifier`](crate::logic::verifier::AccessVerifier).

use email_address::{EmailAddress, Options};
use thiserror::Error;
use url::Url;

/// Number of digits in a room code.
pub const ROOM_CODE_LEN: usize = 6;

/// Hosts of the video-conferencing services a meeting link may point at.
const MEETING_HOSTS: &[&str] = &[
    "meet.google.com",
    "zoom.us",
    "teams.microsoft.com",
    "teams.live.com",
];

/// Credentials a participant submits to enter a poll session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinRequest {
    pub email: String,
    pub meeting_link: String,
    pub room_code: String,
}

/// Form fields of the join screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinField {
    Email,
    MeetingLink,
    RoomCode,
}

/// Inline error shown beneath a single join form field.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Meeting link is required")]
    MeetingLinkRequired,
    #[error("Please enter a valid Google Meet, Zoom, or Teams link")]
    MeetingLinkInvalid,
    #[error("Room code is required")]
    RoomCodeRequired,
    #[error("Room code must be 6 digits")]
    RoomCodeInvalid,
}

impl FieldError {
    /// The form field this error belongs to.
    pub fn field(self) -> JoinField {
        match self {
            Self::EmailRequired | Self::EmailInvalid => JoinField::Email,
            Self::MeetingLinkRequired | Self::MeetingLinkInvalid => JoinField::MeetingLink,
            Self::RoomCodeRequired | Self::RoomCodeInvalid => JoinField::RoomCode,
        }
    }
}

/// At most one error per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    email: Option<FieldError>,
    meeting_link: Option<FieldError>,
    room_code: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: JoinField) -> Option<FieldError> {
        match field {
            JoinField::Email => self.email,
            JoinField::MeetingLink => self.meeting_link,
            JoinField::RoomCode => self.room_code,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.meeting_link.is_none() && self.room_code.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, error: FieldError) {
        let slot = match error.field() {
            JoinField::Email => &mut self.email,
            JoinField::MeetingLink => &mut self.meeting_link,
            JoinField::RoomCode => &mut self.room_code,
        };
        *slot = Some(error);
    }
}

/// Why a well-formed join request was refused.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DenialReason {
    #[error("Email not found in participant list")]
    EmailNotRegistered,
    #[error("Invalid room code")]
    InvalidRoomCode,
    #[error("Invalid meeting link format")]
    InvalidMeetingLink,
}

/// Outcome of verifying a join request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Granted,
    Denied(DenialReason),
}

/// Check that every field is present and well-shaped.
///
/// All three fields are checked so the form can show every problem at once.
pub fn check_form(request: &JoinRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    let email = request.email.trim();
    if email.is_empty() {
        errors.set(FieldError::EmailRequired);
    } else if !is_email(email) {
        errors.set(FieldError::EmailInvalid);
    }

    let link = request.meeting_link.trim();
    if link.is_empty() {
        errors.set(FieldError::MeetingLinkRequired);
    } else if !is_meeting_link(link) {
        errors.set(FieldError::MeetingLinkInvalid);
    }

    if request.room_code.is_empty() {
        errors.set(FieldError::RoomCodeRequired);
    } else if !is_room_code(&request.room_code) {
        errors.set(FieldError::RoomCodeInvalid);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Whether the value is a bare email address. Display-name forms such as
/// `Ada <ada@student.edu>` are rejected.
pub fn is_email(value: &str) -> bool {
    EmailAddress::parse_with_options(value, Options::default().without_display_text()).is_ok()
}

/// Whether the value is an `http`/`https` URL on a known conferencing host.
///
/// Subdomains count (`us02web.zoom.us`). The path is not inspected here.
pub fn is_meeting_link(value: &str) -> bool {
    Url::parse(value)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| {
            MEETING_HOSTS
                .iter()
                .any(|known| host == *known || host.ends_with(&format!(".{known}")))
        })
}

/// Whether the value is exactly [`ROOM_CODE_LEN`] ASCII digits.
pub fn is_room_code(value: &str) -> bool {
    value.len() == ROOM_CODE_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// Keep only ASCII digits and cap the length at [`ROOM_CODE_LEN`].
pub fn sanitize_room_code_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ROOM_CODE_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, link: &str, code: &str) -> JoinRequest {
        JoinRequest {
            email: email.into(),
            meeting_link: link.into(),
            room_code: code.into(),
        }
    }

    #[test]
    fn well_formed_request_passes_guard() {
        let req = request(
            "ada@student.edu",
            "https://meet.google.com/abc-defg-hij",
            "742193",
        );
        assert_eq!(check_form(&req), Ok(()));
    }

    #[test]
    fn empty_form_reports_required_for_every_field() {
        let errors = check_form(&JoinRequest::default()).unwrap_err();

        assert_eq!(errors.get(JoinField::Email), Some(FieldError::EmailRequired));
        assert_eq!(
            errors.get(JoinField::MeetingLink),
            Some(FieldError::MeetingLinkRequired)
        );
        assert_eq!(
            errors.get(JoinField::RoomCode),
            Some(FieldError::RoomCodeRequired)
        );
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let req = request("ada.student.edu", "https://zoom.us/j/1234567890", "742193");
        let errors = check_form(&req).unwrap_err();

        assert_eq!(errors.get(JoinField::Email), Some(FieldError::EmailInvalid));
        assert_eq!(errors.get(JoinField::MeetingLink), None);
        assert_eq!(errors.get(JoinField::RoomCode), None);
    }

    #[test]
    fn display_name_email_is_invalid() {
        let req = request(
            "Ada Lovelace <ada@student.edu>",
            "https://meet.google.com/abc-defg-hij",
            "742193",
        );
        let errors = check_form(&req).unwrap_err();

        assert_eq!(errors.get(JoinField::Email), Some(FieldError::EmailInvalid));
        assert!(!is_email("Ada <ada@student.edu>"));
        assert!(is_email("ada@student.edu"));
    }

    #[test]
    fn room_code_must_be_six_digits() {
        for code in ["74219", "7421930", "74a193"] {
            let req = request("ada@student.edu", "https://zoom.us/j/1234567890", code);
            let errors = check_form(&req).unwrap_err();
            assert_eq!(
                errors.get(JoinField::RoomCode),
                Some(FieldError::RoomCodeInvalid),
                "code {code:?}"
            );
        }
    }

    #[test]
    fn meeting_link_shape_accepts_known_hosts_only() {
        assert!(is_meeting_link("https://meet.google.com/abc-defg-hij"));
        assert!(is_meeting_link("https://us02web.zoom.us/j/123"));
        assert!(is_meeting_link(
            "https://teams.microsoft.com/l/meetup-join/abc"
        ));
        assert!(!is_meeting_link("https://example.com/meet"));
        assert!(!is_meeting_link("ftp://meet.google.com/abc-defg-hij"));
        assert!(!is_meeting_link("notzoom.us/j/123"));
        assert!(!is_meeting_link("https://evilzoom.us/j/123"));
    }

    #[test]
    fn room_code_input_is_sanitized() {
        assert_eq!(sanitize_room_code_input("74-21 93x5"), "742193");
        assert_eq!(sanitize_room_code_input("abc"), "");
    }

    #[test]
    fn field_error_messages_match_form_copy() {
        assert_eq!(FieldError::RoomCodeInvalid.to_string(), "Room code must be 6 digits");
        assert_eq!(
            DenialReason::EmailNotRegistered.to_string(),
            "Email not found in participant list"
        );
    }
}
