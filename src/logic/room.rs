//! Room code generation for hosts opening a poll session.

use uuid::Uuid;

use crate::models::join::ROOM_CODE_LEN;

/// Generate a random zero-padded 6-digit room code.
pub fn generate_room_code() -> String {
    let n = Uuid::new_v4().as_u128() % 10u128.pow(ROOM_CODE_LEN as u32);
    format!("{n:0width$}", width = ROOM_CODE_LEN)
}

/// Shareable invite text for a room.
pub fn invite_text(room_code: &str) -> String {
    format!("Join my PollPulse session with room code {room_code}")
}
