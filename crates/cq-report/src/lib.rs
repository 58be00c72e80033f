//! Plain-text rendering of the nightly accountability email.
//!
//! The email body is assembled from four sections, in order:
//!
//! - **Team**: the AL and CQ duty roster in configured display order
//! - **Red-Card Lates** and **Lates**: one line per late, with the bay MTL
//! - **Notes**: scanner outage, on-call MTL and free-form notes
//! - **Signature**: salutation and sender block
//!
//! Rendering is a pure function of the record and the standards tables.

mod lates;
mod notes;
mod person;
mod signature;
mod team;

use cq_model::{ExtractionMode, FormRecord, LateKind, RawFieldSnapshot, ValidationFailed};
use cq_standards::Standards;
use cq_validate::{ExtractionContext, extract_preview};
use tracing::info;

pub use lates::render_late_section;
pub use notes::{CAC_UNAVAILABLE_LINE, render_notes_section};
pub use person::format_person;
pub use signature::render_signature;
pub use team::render_team_section;

/// Render a record with the embedded tables.
pub fn render(record: &FormRecord) -> String {
    render_with(record, Standards::embedded())
}

/// Render a record into the email body. Lines are joined with `\n`.
pub fn render_with(record: &FormRecord, standards: &Standards) -> String {
    let mut lines = render_team_section(record, standards);
    for kind in [LateKind::RedCard, LateKind::Standard] {
        lines.push(String::new());
        lines.extend(render_late_section(
            kind.title(),
            record.lates_of(kind),
            &record.manor,
            standards,
        ));
    }
    lines.push(String::new());
    lines.extend(render_notes_section(&record.notes));

    let signature = render_signature(&record.signature, standards);
    if !signature.is_empty() {
        lines.push(String::new());
        lines.push(String::new());
        lines.extend(signature);
    }
    lines.join("\n")
}

/// Strictly extract the snapshot and render the final email.
///
/// # Errors
///
/// Returns every problem in the snapshot when it is not ready to send.
pub fn generate_email(
    snapshot: &RawFieldSnapshot,
    standards: &Standards,
) -> Result<String, ValidationFailed> {
    let record = ExtractionContext::new(standards)
        .with_mode(ExtractionMode::Strict)
        .extract(snapshot)?;
    let email = render_with(&record, standards);
    info!(lines = email.lines().count(), "generated email");
    Ok(email)
}

/// Best-effort rendering of a partially filled form. Never fails.
pub fn preview_email(snapshot: &RawFieldSnapshot, standards: &Standards) -> String {
    render_with(&extract_preview(snapshot, standards), standards)
}
