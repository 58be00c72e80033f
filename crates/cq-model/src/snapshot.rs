//! Raw form values as supplied by the UI layer.
//!
//! A snapshot is assembled fresh for every extraction call and holds only
//! plain strings and booleans. Every field defaults to empty so a partially
//! filled form still deserializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The four name fields shared by every person entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPerson {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Last")]
    pub last: String,
    #[serde(rename = "First")]
    pub first: String,
    #[serde(rename = "MI")]
    pub mi: String,
}

impl RawPerson {
    pub fn new(rank: &str, last: &str, first: &str, mi: &str) -> Self {
        Self {
            rank: rank.to_string(),
            last: last.to_string(),
            first: first.to_string(),
            mi: mi.to_string(),
        }
    }

    /// Returns true if every field is blank after trimming.
    pub fn is_blank(&self) -> bool {
        [&self.rank, &self.last, &self.first, &self.mi]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}

/// One late row. `late_type` is only collected for red-card lates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLate {
    #[serde(flatten)]
    pub person: RawPerson,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Type")]
    pub late_type: String,
    #[serde(rename = "Reason")]
    pub reason: String,
}

impl RawLate {
    /// Returns true if none of the late-specific fields carry a value.
    pub fn details_blank(&self) -> bool {
        [&self.room, &self.time, &self.late_type, &self.reason]
            .iter()
            .all(|value| value.trim().is_empty())
    }
}

/// A team role entry: one person, or a list for multi-person roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTeamEntry {
    Single(RawPerson),
    Many(Vec<RawPerson>),
}

impl RawTeamEntry {
    /// Person rows in entry order; a single entry yields one row.
    pub fn rows(&self) -> Vec<&RawPerson> {
        match self {
            RawTeamEntry::Single(person) => vec![person],
            RawTeamEntry::Many(people) => people.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNotes {
    pub cac_scanner: bool,
    pub on_call_mtl: String,
    pub additional_notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSignature {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Last")]
    pub last: String,
    #[serde(rename = "First")]
    pub first: String,
    #[serde(rename = "MI")]
    pub mi: String,
    #[serde(rename = "AFSC/Job")]
    pub afsc_job: String,
    #[serde(rename = "Squadron")]
    pub squadron: String,
}

/// Everything the form holds at the moment of extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFieldSnapshot {
    pub manor: String,
    pub al_team: BTreeMap<Role, RawTeamEntry>,
    pub cq_team: BTreeMap<Role, RawTeamEntry>,
    pub red_card_lates: Vec<RawLate>,
    pub lates: Vec<RawLate>,
    pub notes: RawNotes,
    pub signature: RawSignature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_snapshot() {
        let json = r#"{
            "manor": "Winters",
            "cq_team": {
                "CQ Lead": {"Rank": "E-4 (SrA)", "Last": "smith"},
                "CQ Runner": [{"Last": "doe"}, {}]
            },
            "red_card_lates": [{"Room": "c116", "Type": "Both"}],
            "signature": {"AFSC/Job": "Cyber Warfare Operations"}
        }"#;
        let snapshot: RawFieldSnapshot = serde_json::from_str(json).expect("parse snapshot");

        assert_eq!(snapshot.manor, "Winters");
        assert!(snapshot.al_team.is_empty());
        let lead = &snapshot.cq_team[&Role::CqLead];
        assert_eq!(lead.rows()[0].last, "smith");
        assert_eq!(lead.rows()[0].first, "");
        assert_eq!(snapshot.cq_team[&Role::CqRunner].rows().len(), 2);
        assert_eq!(snapshot.red_card_lates[0].late_type, "Both");
        assert!(snapshot.red_card_lates[0].person.is_blank());
        assert_eq!(snapshot.signature.afsc_job, "Cyber Warfare Operations");
        assert!(!snapshot.notes.cac_scanner);
    }

    #[test]
    fn rejects_unknown_role_key() {
        let json = r#"{"cq_team": {"CQ Janitor": {}}}"#;
        assert!(serde_json::from_str::<RawFieldSnapshot>(json).is_err());
    }

    #[test]
    fn blank_checks_ignore_whitespace() {
        let person = RawPerson::new(" ", "", "\t", "");
        assert!(person.is_blank());
        let late = RawLate {
            reason: "  ".to_string(),
            ..RawLate::default()
        };
        assert!(late.details_blank());
    }
}
