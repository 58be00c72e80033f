use cq_model::Notes;

pub const CAC_UNAVAILABLE_LINE: &str = "- CAC System Non-Operational: Manual Accountability Used.";

/// Render the notes block. Lists the scanner outage, the on-call MTL and
/// each additional note; shows `- N/A` when nothing applies.
pub fn render_notes_section(notes: &Notes) -> Vec<String> {
    let mut lines = vec!["Notes:".to_string()];
    if notes.cac_scanner_unavailable {
        lines.push(CAC_UNAVAILABLE_LINE.to_string());
    }
    let on_call = notes.on_call_mtl.trim();
    if !on_call.is_empty() {
        lines.push(format!("- On-Call MTL: {on_call}"));
    }
    lines.extend(
        notes
            .additional_notes
            .iter()
            .map(|note| note.trim())
            .filter(|note| !note.is_empty())
            .map(|note| format!("- {note}")),
    );
    if lines.len() == 1 {
        lines.push("- N/A".to_string());
    }
    lines
}
