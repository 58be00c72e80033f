//! Form snapshot extraction for the CQ accountability report.
//!
//! Turns a [`RawFieldSnapshot`](cq_model::RawFieldSnapshot) into a
//! [`FormRecord`](cq_model::FormRecord), applying name formatting, room
//! canonicalization, and required-field checks.

mod extract;
mod mtl;
mod person;
mod room;

pub use extract::{ExtractionContext, extract_all, extract_preview};
pub use mtl::{NOT_APPLICABLE, UNKNOWN_MTL, bay_key, lookup_mtl, lookup_mtl_in};
pub use person::{extract_person, title_case};
pub use room::{clean_room, normalize_room, normalize_room_lenient};
