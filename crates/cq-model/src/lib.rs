pub mod error;
pub mod options;
pub mod record;
pub mod role;
pub mod snapshot;

pub use error::{DIALOG_PREAMBLE, ExtractError, Issue, ValidationFailed};
pub use options::ExtractionMode;
pub use record::{
    FormRecord, LateEntry, LateKind, Notes, PersonRecord, Signature, SignatureField, TeamMember,
};
pub use role::{DisplaySlot, Role, SEPARATOR_TOKEN, Team};
pub use snapshot::{RawFieldSnapshot, RawLate, RawNotes, RawPerson, RawSignature, RawTeamEntry};
