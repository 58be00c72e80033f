//! Bay → MTL lookup.

use cq_standards::Standards;

use crate::room::clean_room;

/// Returned when manor or room is missing.
pub const NOT_APPLICABLE: &str = "N/A";

/// Returned when the bay has no entry in the assignment table.
pub const UNKNOWN_MTL: &str = "<Unknown MTL>";

/// Build the three-character bay key: manor initial, then the bay letter
/// and floor digit from the room (`Winters` + `C116` -> `WC1`).
pub fn bay_key(manor: &str, room: &str) -> Option<String> {
    let initial = manor.trim().chars().next()?.to_ascii_uppercase();
    let cleaned = clean_room(room);
    let bay: String = cleaned.chars().take(2).collect();
    if bay.chars().count() < 2 {
        return None;
    }
    Some(format!("{initial}{bay}"))
}

/// Find the MTL on call for a room using the embedded tables.
pub fn lookup_mtl(manor: &str, room: &str) -> &'static str {
    lookup_mtl_in(Standards::embedded(), manor, room)
}

/// Find the MTL on call for a room.
pub fn lookup_mtl_in<'a>(standards: &'a Standards, manor: &str, room: &str) -> &'a str {
    if manor.trim().is_empty() || room.trim().is_empty() {
        return NOT_APPLICABLE;
    }
    match bay_key(manor, room) {
        Some(key) => standards.mtl_for_bay(&key).unwrap_or(UNKNOWN_MTL),
        None => NOT_APPLICABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_by_bay_and_floor() {
        assert_eq!(lookup_mtl("Winters", "C116"), "SSgt Seifert");
        assert_eq!(lookup_mtl("Fosters", "a-305"), "TSgt McDonald");
        assert_eq!(lookup_mtl("winters", "d301"), "TSgt Wellman");
    }

    #[test]
    fn missing_inputs_are_not_applicable() {
        assert_eq!(lookup_mtl("", "C116"), NOT_APPLICABLE);
        assert_eq!(lookup_mtl("Winters", ""), NOT_APPLICABLE);
        assert_eq!(lookup_mtl("Winters", "C"), NOT_APPLICABLE);
    }

    #[test]
    fn unassigned_bays() {
        assert_eq!(lookup_mtl("Winters", "D101"), UNKNOWN_MTL);
        assert_eq!(lookup_mtl("Fosters", "D210"), "N/A");
    }

    #[test]
    fn bay_key_uses_manor_initial() {
        assert_eq!(bay_key("Winters", "c116").as_deref(), Some("WC1"));
        assert_eq!(bay_key("  fosters", "B 2-10").as_deref(), Some("FB2"));
        assert_eq!(bay_key("", "B210"), None);
    }
}
