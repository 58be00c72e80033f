//! On-disk layout of the standards TOML document.
//!
//! Values stay as plain strings here; [`crate::Standards`] turns them into
//! typed tables and checks their consistency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsDocument {
    pub header: Header,
    pub form: FormSection,
    pub roles: RolesSection,
    pub ranks: Vec<RankEntry>,
    pub lates: LatesSection,
    #[serde(default)]
    pub notes: NotesSection,
    pub signature: SignatureSection,
    pub bay_mtls: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSection {
    pub manors: Vec<String>,
    pub closing_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesSection {
    pub al: Vec<String>,
    pub cq: Vec<String>,
    #[serde(default)]
    pub required_al: Vec<String>,
    #[serde(default)]
    pub required_cq: Vec<String>,
    #[serde(default)]
    pub anchors: Vec<String>,
    pub display_order: Vec<String>,
}

/// A rank as offered in the form and its email abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub option: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatesSection {
    pub red_card_types: Vec<String>,
    pub red_card_times: Vec<String>,
    pub standard_times: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesSection {
    #[serde(default)]
    pub on_call_mtls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureSection {
    pub required_fields: Vec<String>,
    #[serde(default)]
    pub squadrons: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<String>,
    pub job_sentinel: String,
}
