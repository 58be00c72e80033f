//! Room number canonicalization.

use std::sync::LazyLock;

use cq_model::ExtractError;
use regex::Regex;

/// Bay letter A-D, floor 1-3, two-digit room.
static ROOM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-D][1-3][0-9]{2}$").expect("Invalid room regex"));

/// Trim, drop spaces and hyphens, and upper-case. Does not validate.
pub fn clean_room(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| *ch != ' ' && *ch != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Canonicalize a room number (`"c 1-16"` -> `"C116"`).
pub fn normalize_room(raw: &str) -> Result<String, ExtractError> {
    let cleaned = clean_room(raw);
    if ROOM_PATTERN.is_match(&cleaned) {
        Ok(cleaned)
    } else {
        Err(ExtractError::InvalidRoomFormat {
            raw: raw.to_string(),
        })
    }
}

/// Preview fallback: the canonical code when valid, otherwise the trimmed
/// text as typed.
pub fn normalize_room_lenient(raw: &str) -> String {
    normalize_room(raw).unwrap_or_else(|_| raw.trim().to_string())
}
