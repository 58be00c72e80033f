use cq_model::LateEntry;
use cq_standards::Standards;
use cq_validate::{NOT_APPLICABLE, lookup_mtl_in};

use crate::person::format_person;

const NO_REASON: &str = "No reason provided";

/// Render a late section: a `<title>:` header followed by one line per
/// entry, or `- N/A` when there are none.
///
/// Each line reads `- <person> - <room> - <mtl> - Missed <time>[ <type>] - <reason>`.
pub fn render_late_section(
    title: &str,
    entries: &[LateEntry],
    manor: &str,
    standards: &Standards,
) -> Vec<String> {
    let mut lines = vec![format!("{title}:")];
    if entries.is_empty() {
        lines.push(format!("- {NOT_APPLICABLE}"));
        return lines;
    }
    lines.extend(
        entries
            .iter()
            .map(|entry| late_line(entry, manor, standards)),
    );
    lines
}

fn late_line(entry: &LateEntry, manor: &str, standards: &Standards) -> String {
    let person = format_person(entry.person.as_ref(), standards)
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());
    let mtl = lookup_mtl_in(standards, manor, &entry.room);
    let type_text = match entry.late_type.trim() {
        "" => String::new(),
        "Both" => " Sign-in & Turn-in".to_string(),
        other => format!(" {other}"),
    };
    let reason = match entry.reason.trim() {
        "" => NO_REASON,
        reason => reason,
    };
    format!(
        "- {person} - {room} - {mtl} - Missed {time}{type_text} - {reason}",
        room = entry.room,
        time = entry.time,
    )
}
