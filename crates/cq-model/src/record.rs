//! Normalized form records produced by extraction and consumed by rendering.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A named person with a rank. Rank and last name are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Rank option as selected in the form, e.g. `E-4 (SrA)`.
    pub rank: String,
    pub last: String,
    pub first: String,
    /// Zero or one upper-case character.
    pub middle_initial: String,
}

/// Selects which late section an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LateKind {
    RedCard,
    Standard,
}

impl LateKind {
    /// Section title used in the email body.
    pub fn title(&self) -> &'static str {
        match self {
            LateKind::RedCard => "Red-Card Lates",
            LateKind::Standard => "Lates",
        }
    }

    /// Prefix for row contexts in validation messages.
    pub fn context_title(&self) -> &'static str {
        match self {
            LateKind::RedCard => "Red-Card Lates",
            LateKind::Standard => "Standard Lates",
        }
    }

    /// Context string for a zero-based row index.
    pub fn row_context(&self, index: usize) -> String {
        format!("{} Row {}", self.context_title(), index + 1)
    }
}

/// A curfew violation row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateEntry {
    /// `None` only for preview rows that carry late details but no name.
    pub person: Option<PersonRecord>,
    /// Canonical room code (`C116`); raw text in degraded previews.
    pub room: String,
    pub time: String,
    /// Empty for standard lates.
    pub late_type: String,
    pub reason: String,
}

/// What a team role resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamMember {
    Single(PersonRecord),
    Many(Vec<PersonRecord>),
}

impl TeamMember {
    pub fn people(&self) -> Vec<&PersonRecord> {
        match self {
            TeamMember::Single(person) => vec![person],
            TeamMember::Many(people) => people.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TeamMember::Single(_) => false,
            TeamMember::Many(people) => people.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    pub cac_scanner_unavailable: bool,
    pub on_call_mtl: String,
    /// Trimmed, non-empty notes in entry order.
    pub additional_notes: Vec<String>,
}

/// A field of the signature block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SignatureField {
    Rank,
    Last,
    First,
    Mi,
    AfscJob,
    Squadron,
}

impl SignatureField {
    pub const ALL: [SignatureField; 6] = [
        SignatureField::Rank,
        SignatureField::Last,
        SignatureField::First,
        SignatureField::Mi,
        SignatureField::AfscJob,
        SignatureField::Squadron,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignatureField::Rank => "Rank",
            SignatureField::Last => "Last",
            SignatureField::First => "First",
            SignatureField::Mi => "MI",
            SignatureField::AfscJob => "AFSC/Job",
            SignatureField::Squadron => "Squadron",
        }
    }
}

impl fmt::Display for SignatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SignatureField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SignatureField::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown signature field: {s}"))
    }
}

impl TryFrom<String> for SignatureField {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SignatureField> for String {
    fn from(field: SignatureField) -> Self {
        field.label().to_string()
    }
}

/// Trimmed signature block values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub rank: String,
    pub last: String,
    pub first: String,
    pub mi: String,
    pub afsc_job: String,
    pub squadron: String,
}

impl Signature {
    pub fn get(&self, field: SignatureField) -> &str {
        match field {
            SignatureField::Rank => &self.rank,
            SignatureField::Last => &self.last,
            SignatureField::First => &self.first,
            SignatureField::Mi => &self.mi,
            SignatureField::AfscJob => &self.afsc_job,
            SignatureField::Squadron => &self.squadron,
        }
    }

    pub fn is_empty(&self) -> bool {
        SignatureField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

/// The normalized form. Built once per extraction and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub manor: String,
    pub al_team: BTreeMap<Role, PersonRecord>,
    pub cq_team: BTreeMap<Role, TeamMember>,
    pub red_card_lates: Vec<LateEntry>,
    pub lates: Vec<LateEntry>,
    pub notes: Notes,
    pub signature: Signature,
}

impl FormRecord {
    /// People assigned to a role, looking in the AL team first.
    pub fn people_for(&self, role: Role) -> Vec<&PersonRecord> {
        if let Some(person) = self.al_team.get(&role) {
            return vec![person];
        }
        self.cq_team
            .get(&role)
            .map(TeamMember::people)
            .unwrap_or_default()
    }

    pub fn lates_of(&self, kind: LateKind) -> &[LateEntry] {
        match kind {
            LateKind::RedCard => &self.red_card_lates,
            LateKind::Standard => &self.lates,
        }
    }
}
