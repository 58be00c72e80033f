use cq_model::PersonRecord;
use cq_standards::Standards;

/// Format a person as `<RankAbbrev> <Last>, <First> <MI>`.
///
/// Returns `None` for an absent person or one without a rank. A rank with
/// no known abbreviation is left out of the line.
pub fn format_person(person: Option<&PersonRecord>, standards: &Standards) -> Option<String> {
    let person = person?;
    if person.rank.trim().is_empty() {
        return None;
    }
    let abbreviation = standards.rank_abbreviation(&person.rank).unwrap_or("");
    Some(name_line(
        abbreviation,
        &person.last,
        &person.first,
        &person.middle_initial,
    ))
}

/// Join name parts, omitting empty trailing components.
pub(crate) fn name_line(abbreviation: &str, last: &str, first: &str, mi: &str) -> String {
    let mut name = last.to_string();
    if !first.is_empty() {
        name.push_str(", ");
        name.push_str(first);
    }
    if !mi.is_empty() {
        name.push(' ');
        name.push_str(mi);
    }
    if abbreviation.is_empty() {
        name
    } else {
        format!("{abbreviation} {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(rank: &str, last: &str, first: &str, mi: &str) -> PersonRecord {
        PersonRecord {
            rank: rank.to_string(),
            last: last.to_string(),
            first: first.to_string(),
            middle_initial: mi.to_string(),
        }
    }

    #[test]
    fn formats_full_name() {
        let standards = Standards::embedded();
        let lead = person("E-4 (SrA)", "Smith", "John", "Q");
        assert_eq!(
            format_person(Some(&lead), standards).as_deref(),
            Some("SrA Smith, John Q")
        );
    }

    #[test]
    fn omits_empty_trailing_parts() {
        let standards = Standards::embedded();
        let no_mi = person("E-1 (Spc1)", "Doe", "Jane", "");
        let last_only = person("E-2 (Amn)", "Doe", "", "");
        assert_eq!(
            format_person(Some(&no_mi), standards).as_deref(),
            Some("Spc1 Doe, Jane")
        );
        assert_eq!(
            format_person(Some(&last_only), standards).as_deref(),
            Some("Amn Doe")
        );
    }

    #[test]
    fn unknown_rank_has_no_abbreviation() {
        let standards = Standards::embedded();
        let officer = person("O-1", "Doe", "Jane", "");
        assert_eq!(
            format_person(Some(&officer), standards).as_deref(),
            Some("Doe, Jane")
        );
    }

    #[test]
    fn absent_or_rankless_person_is_none() {
        let standards = Standards::embedded();
        assert_eq!(format_person(None, standards), None);
        let rankless = person("", "Doe", "Jane", "");
        assert_eq!(format_person(Some(&rankless), standards), None);
    }
}
