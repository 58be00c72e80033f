use cq_model::{DisplaySlot, FormRecord};
use cq_standards::Standards;

use crate::person::format_person;

/// Render the duty roster lines in configured display order.
///
/// Anchor roles print `<Role>:` even when nobody is assigned; other empty
/// roles print nothing. Separators never stack and never trail.
pub fn render_team_section(record: &FormRecord, standards: &Standards) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for slot in &standards.display_order {
        match *slot {
            DisplaySlot::Separator => {
                if lines.last().is_some_and(|line| !line.is_empty()) {
                    lines.push(String::new());
                }
            }
            DisplaySlot::Role(role) => {
                let label = role.label();
                let people: Vec<String> = record
                    .people_for(role)
                    .into_iter()
                    .filter_map(|person| format_person(Some(person), standards))
                    .map(|person| format!("{label}: {person}"))
                    .collect();
                if !people.is_empty() {
                    lines.extend(people);
                } else if standards.is_anchor(role) {
                    lines.push(format!("{label}:"));
                }
            }
        }
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
