use std::collections::BTreeMap;
use std::path::Path;

use cq_model::{DisplaySlot, LateKind, Role, SEPARATOR_TOKEN, SignatureField, Team};
use tracing::debug;

use crate::document::{RankEntry, StandardsDocument};
use crate::error::{Result, StandardsError};

/// Schema name expected in the `[header]` table.
pub const SCHEMA: &str = "cq-report.standards";

/// Schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Typed, validated configuration tables.
///
/// Loaded once and shared read-only by extraction and rendering.
#[derive(Debug, Clone)]
pub struct Standards {
    pub manors: Vec<String>,
    pub closing_location: String,
    pub al_roles: Vec<Role>,
    pub cq_roles: Vec<Role>,
    pub required_al_roles: Vec<Role>,
    pub required_cq_roles: Vec<Role>,
    /// Roles that always print a line, even when nobody is assigned.
    pub anchor_roles: Vec<Role>,
    pub display_order: Vec<DisplaySlot>,
    pub ranks: Vec<RankEntry>,
    pub red_card_types: Vec<String>,
    pub red_card_times: Vec<String>,
    pub standard_times: Vec<String>,
    pub on_call_mtls: Vec<String>,
    pub required_signature_fields: Vec<SignatureField>,
    pub squadrons: Vec<String>,
    pub jobs: Vec<String>,
    /// Job value that is never printed in the signature.
    pub job_sentinel: String,
    /// Bay key (manor initial, bay letter, floor digit) to MTL name.
    pub bay_mtls: BTreeMap<String, String>,
}

impl Standards {
    /// The tables compiled into the binary.
    pub fn embedded() -> &'static Standards {
        crate::embedded::embedded()
    }

    /// Load tables from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let standards = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded standards override");
        Ok(standards)
    }

    /// Parse and validate a standards TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let document: StandardsDocument =
            toml::from_str(text).map_err(|source| StandardsError::Toml { source })?;
        Self::from_document(document)
    }

    pub fn from_document(document: StandardsDocument) -> Result<Self> {
        let header = &document.header;
        if header.schema != SCHEMA || header.schema_version != SCHEMA_VERSION {
            return Err(StandardsError::InvalidSchema {
                schema: header.schema.clone(),
                version: header.schema_version,
                expected: SCHEMA,
                expected_version: SCHEMA_VERSION,
            });
        }

        let roles = &document.roles;
        let al_roles = parse_roles("roles.al", &roles.al)?;
        let cq_roles = parse_roles("roles.cq", &roles.cq)?;
        ensure_team("roles.al", &al_roles, Team::AirmanLeader)?;
        ensure_team("roles.cq", &cq_roles, Team::ChargeOfQuarters)?;
        if !cq_roles.iter().any(Role::is_multi_person) {
            return Err(StandardsError::invalid(format!(
                "roles.cq must include {}",
                Role::CqRunner
            )));
        }

        let required_al_roles = parse_roles("roles.required_al", &roles.required_al)?;
        ensure_subset("roles.required_al", &required_al_roles, &al_roles)?;
        let required_cq_roles = parse_roles("roles.required_cq", &roles.required_cq)?;
        ensure_subset("roles.required_cq", &required_cq_roles, &cq_roles)?;

        let configured: Vec<Role> = al_roles.iter().chain(&cq_roles).copied().collect();
        let anchor_roles = parse_roles("roles.anchors", &roles.anchors)?;
        ensure_subset("roles.anchors", &anchor_roles, &configured)?;

        let display_order = parse_display_order(&roles.display_order)?;
        let displayed: Vec<Role> = display_order
            .iter()
            .filter_map(|slot| match slot {
                DisplaySlot::Role(role) => Some(*role),
                DisplaySlot::Separator => None,
            })
            .collect();
        ensure_subset("roles.display_order", &displayed, &configured)?;

        let required_signature_fields = document
            .signature
            .required_fields
            .iter()
            .map(|name| name.parse::<SignatureField>().map_err(StandardsError::invalid))
            .collect::<Result<Vec<_>>>()?;

        for key in document.bay_mtls.keys() {
            if !is_bay_key(key) {
                return Err(StandardsError::invalid(format!(
                    "bay key '{key}' must be manor initial, bay letter, and floor digit"
                )));
            }
        }

        if document.form.manors.iter().any(|m| m.trim().is_empty()) {
            return Err(StandardsError::invalid("form.manors contains a blank name"));
        }

        Ok(Self {
            manors: document.form.manors,
            closing_location: document.form.closing_location,
            al_roles,
            cq_roles,
            required_al_roles,
            required_cq_roles,
            anchor_roles,
            display_order,
            ranks: document.ranks,
            red_card_types: document.lates.red_card_types,
            red_card_times: document.lates.red_card_times,
            standard_times: document.lates.standard_times,
            on_call_mtls: document.notes.on_call_mtls,
            required_signature_fields,
            squadrons: document.signature.squadrons,
            jobs: document.signature.jobs,
            job_sentinel: document.signature.job_sentinel,
            bay_mtls: document.bay_mtls,
        })
    }

    /// Email abbreviation for a rank option (`E-4 (SrA)` -> `SrA`).
    pub fn rank_abbreviation(&self, option: &str) -> Option<&str> {
        self.ranks
            .iter()
            .find(|entry| entry.option == option)
            .map(|entry| entry.abbreviation.as_str())
    }

    pub fn mtl_for_bay(&self, key: &str) -> Option<&str> {
        self.bay_mtls.get(key).map(String::as_str)
    }

    pub fn roles(&self, team: Team) -> &[Role] {
        match team {
            Team::AirmanLeader => &self.al_roles,
            Team::ChargeOfQuarters => &self.cq_roles,
        }
    }

    pub fn required_roles(&self, team: Team) -> &[Role] {
        match team {
            Team::AirmanLeader => &self.required_al_roles,
            Team::ChargeOfQuarters => &self.required_cq_roles,
        }
    }

    pub fn is_anchor(&self, role: Role) -> bool {
        self.anchor_roles.contains(&role)
    }

    /// Allowed time codes for a late section.
    pub fn late_times(&self, kind: LateKind) -> &[String] {
        match kind {
            LateKind::RedCard => &self.red_card_times,
            LateKind::Standard => &self.standard_times,
        }
    }
}

fn parse_roles(table: &'static str, names: &[String]) -> Result<Vec<Role>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Role>().map_err(|_| StandardsError::UnknownRole {
                table,
                name: name.clone(),
            })
        })
        .collect()
}

fn parse_display_order(names: &[String]) -> Result<Vec<DisplaySlot>> {
    names
        .iter()
        .map(|name| {
            name.parse::<DisplaySlot>()
                .map_err(|_| StandardsError::UnknownRole {
                    table: "roles.display_order",
                    name: name.clone(),
                })
        })
        .collect()
}

fn ensure_team(table: &str, roles: &[Role], team: Team) -> Result<()> {
    match roles.iter().find(|role| role.team() != team) {
        Some(role) => Err(StandardsError::invalid(format!(
            "{table}: {role} does not belong to the {team}"
        ))),
        None => Ok(()),
    }
}

fn ensure_subset(table: &str, roles: &[Role], allowed: &[Role]) -> Result<()> {
    match roles.iter().find(|role| !allowed.contains(role)) {
        Some(role) => Err(StandardsError::invalid(format!(
            "{table}: {role} is not a configured role"
        ))),
        None => Ok(()),
    }
}

fn is_bay_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedded::STANDARDS_TOML;

    #[test]
    fn embedded_tables_load() {
        let standards = Standards::embedded();
        assert_eq!(standards.manors, vec!["Winters", "Fosters"]);
        assert_eq!(standards.rank_abbreviation("E-4 (SrA)"), Some("SrA"));
        assert_eq!(standards.rank_abbreviation("E-2 (Spc2)"), Some("Spc2"));
        assert_eq!(standards.rank_abbreviation("O-1"), None);
        assert_eq!(standards.mtl_for_bay("WC1"), Some("SSgt Seifert"));
        assert_eq!(standards.mtl_for_bay("FD2"), Some("N/A"));
        assert_eq!(standards.required_roles(Team::AirmanLeader), &[Role::AlCards]);
        assert_eq!(
            standards.required_roles(Team::ChargeOfQuarters),
            &[Role::CqLead, Role::CqDoorGuard]
        );
        assert!(standards.is_anchor(Role::CqRunner));
        assert!(!standards.is_anchor(Role::AldWeekends));
        assert_eq!(standards.required_signature_fields.len(), 6);
        assert_eq!(standards.job_sentinel, "Not Available");
        assert_eq!(
            standards.display_order.iter().filter(|slot| **slot == DisplaySlot::Separator).count(),
            2
        );
    }

    #[test]
    fn option_lists_load() {
        let standards = Standards::embedded();
        assert_eq!(standards.squadrons, vec!["338th", "333rd", "533rd"]);
        assert!(standards.jobs.contains(&"Cyber Warfare Operations".to_string()));
        assert!(!standards.jobs.contains(&standards.job_sentinel));
        assert_eq!(standards.on_call_mtls.len(), 10);
        assert!(standards.on_call_mtls.contains(&"TSgt Poe".to_string()));
    }

    #[test]
    fn late_times_follow_kind() {
        let standards = Standards::embedded();
        assert!(standards.late_times(LateKind::RedCard).contains(&"0900".to_string()));
        assert!(!standards.late_times(LateKind::Standard).contains(&"0900".to_string()));
    }

    #[test]
    fn rejects_wrong_schema() {
        let text = STANDARDS_TOML.replace("schema_version = 1", "schema_version = 9");
        let err = Standards::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, StandardsError::InvalidSchema { version: 9, .. }));
    }

    #[test]
    fn rejects_unknown_role() {
        let text = STANDARDS_TOML.replace(
            r#"cq = ["CQ Lead", "CQ Door Guard", "CQ Runner"]"#,
            r#"cq = ["CQ Lead", "CQ Janitor", "CQ Runner"]"#,
        );
        let err = Standards::from_toml_str(&text).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::UnknownRole { table: "roles.cq", .. }
        ));
    }

    #[test]
    fn rejects_role_on_wrong_team() {
        let text = STANDARDS_TOML.replace(
            r#"required_al = ["AL Cards"]"#,
            r#"required_al = ["CQ Lead"]"#,
        );
        let err = Standards::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("roles.required_al"));
    }

    #[test]
    fn rejects_malformed_bay_key() {
        let text = STANDARDS_TOML.replace("WD3 = ", "WD30 = ");
        let err = Standards::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("WD30"));
    }

    #[test]
    fn separator_token_is_documented_in_defaults() {
        assert!(STANDARDS_TOML.contains(&format!("\"{SEPARATOR_TOKEN}\"")));
    }
}
