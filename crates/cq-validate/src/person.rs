//! Person entry extraction and name formatting.

use cq_model::{ExtractError, PersonRecord, RawPerson};

/// Extract a person from its four entry fields.
///
/// Returns `Ok(None)` when every field is blank. Once anything is entered,
/// rank and last name become required. Last and first names are
/// title-cased; the middle initial keeps only its first character,
/// upper-cased.
pub fn extract_person(
    entry: &RawPerson,
    context: &str,
) -> Result<Option<PersonRecord>, ExtractError> {
    if entry.is_blank() {
        return Ok(None);
    }
    let rank = entry.rank.trim();
    let last = entry.last.trim();
    let first = entry.first.trim();
    let mi = entry.mi.trim();

    if rank.is_empty() || last.is_empty() {
        return Err(ExtractError::MissingRequiredField {
            context: context.to_string(),
        });
    }

    Ok(Some(PersonRecord {
        rank: rank.to_string(),
        last: title_case(last),
        first: title_case(first),
        middle_initial: mi.chars().take(1).flat_map(char::to_uppercase).collect(),
    }))
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts at the beginning of the string or after any non-letter,
/// so `o'neil-SMITH` becomes `O'Neil-Smith`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
