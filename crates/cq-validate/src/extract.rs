//! Snapshot → record extraction.
//!
//! The snapshot is walked in a fixed order: manor, AL team, CQ team,
//! red-card lates, standard lates, notes, signature. Problems are collected
//! as [`Issue`]s along the way. Strict extraction fails once at the end with
//! every issue; lenient extraction substitutes a fallback at each step and
//! always returns a record.

use std::collections::BTreeMap;

use cq_model::{
    ExtractionMode, FormRecord, Issue, LateEntry, LateKind, Notes, PersonRecord, RawFieldSnapshot,
    RawLate, RawNotes, RawPerson, RawSignature, RawTeamEntry, Role, Signature, SignatureField, Team,
    TeamMember, ValidationFailed,
};
use cq_standards::Standards;
use tracing::{debug, debug_span, error, warn};

use crate::person::extract_person;
use crate::room::{normalize_room, normalize_room_lenient};

/// Extraction settings: which tables to check against and how strict to be.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'a> {
    pub standards: &'a Standards,
    pub mode: ExtractionMode,
}

impl Default for ExtractionContext<'static> {
    fn default() -> Self {
        Self::new(Standards::embedded())
    }
}

impl<'a> ExtractionContext<'a> {
    /// Strict extraction against the given tables.
    pub fn new(standards: &'a Standards) -> Self {
        Self {
            standards,
            mode: ExtractionMode::Strict,
        }
    }

    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Extract a record from the snapshot.
    ///
    /// # Errors
    ///
    /// In strict mode, returns every problem found in the snapshot. Lenient
    /// mode never fails.
    pub fn extract(&self, snapshot: &RawFieldSnapshot) -> Result<FormRecord, ValidationFailed> {
        let (record, issues) = self.collect(snapshot);
        if issues.is_empty() {
            return Ok(record);
        }
        match self.mode {
            ExtractionMode::Strict => {
                error!("Validation failed with {} errors.", issues.len());
                Err(ValidationFailed::new(issues))
            }
            ExtractionMode::Lenient => {
                debug!(count = issues.len(), "preview ignored incomplete fields");
                Ok(record)
            }
        }
    }

    /// Walk the whole snapshot, returning the record and every issue met.
    /// Never stops early.
    pub fn collect(&self, snapshot: &RawFieldSnapshot) -> (FormRecord, Vec<Issue>) {
        let span = debug_span!("extract", mode = ?self.mode);
        let _guard = span.enter();

        let mut issues = Vec::new();

        let manor = snapshot.manor.trim().to_string();
        if manor.is_empty() {
            issues.push(Issue::ManorMissing {
                options: self.standards.manors.clone(),
            });
        }

        let al_team = self.extract_al_team(&snapshot.al_team, &mut issues);
        let cq_team = self.extract_cq_team(&snapshot.cq_team, &mut issues);
        let red_card_lates =
            self.extract_lates(LateKind::RedCard, &snapshot.red_card_lates, &mut issues);
        let lates = self.extract_lates(LateKind::Standard, &snapshot.lates, &mut issues);
        let notes = extract_notes(&snapshot.notes);
        let signature = extract_signature(&snapshot.signature);
        self.warn_unlisted_options(&notes, &signature);
        self.check_signature(&signature, &mut issues);

        debug!(
            al_roles = al_team.len(),
            cq_roles = cq_team.len(),
            red_card_lates = red_card_lates.len(),
            lates = lates.len(),
            issues = issues.len(),
            "extracted form snapshot"
        );

        let record = FormRecord {
            manor,
            al_team,
            cq_team,
            red_card_lates,
            lates,
            notes,
            signature,
        };
        (record, issues)
    }

    fn extract_al_team(
        &self,
        entries: &BTreeMap<Role, RawTeamEntry>,
        issues: &mut Vec<Issue>,
    ) -> BTreeMap<Role, PersonRecord> {
        self.warn_unconfigured(Team::AirmanLeader, entries);
        let mut team = BTreeMap::new();
        for &role in self.standards.roles(Team::AirmanLeader) {
            let Some(raw) = entries.get(&role).and_then(|entry| single_row(role, entry)) else {
                continue;
            };
            match extract_person(raw, role.as_str()) {
                Ok(Some(person)) => {
                    team.insert(role, person);
                }
                Ok(None) => {}
                Err(err) => issues.push(Issue::from_extract(err, role.as_str())),
            }
        }
        for &role in self.standards.required_roles(Team::AirmanLeader) {
            if !team.contains_key(&role) {
                issues.push(Issue::RoleRequired { role });
            }
        }
        team
    }

    fn extract_cq_team(
        &self,
        entries: &BTreeMap<Role, RawTeamEntry>,
        issues: &mut Vec<Issue>,
    ) -> BTreeMap<Role, TeamMember> {
        self.warn_unconfigured(Team::ChargeOfQuarters, entries);
        let mut team = BTreeMap::new();
        for &role in self.standards.roles(Team::ChargeOfQuarters) {
            let Some(entry) = entries.get(&role) else {
                continue;
            };
            if role.is_multi_person() {
                let mut people = Vec::new();
                for raw in entry.rows() {
                    match extract_person(raw, role.as_str()) {
                        Ok(Some(person)) => people.push(person),
                        Ok(None) => {}
                        Err(err) => issues.push(Issue::from_extract(err, role.as_str())),
                    }
                }
                if !people.is_empty() {
                    team.insert(role, TeamMember::Many(people));
                }
            } else if let Some(raw) = single_row(role, entry) {
                match extract_person(raw, role.as_str()) {
                    Ok(Some(person)) => {
                        team.insert(role, TeamMember::Single(person));
                    }
                    Ok(None) => {}
                    Err(err) => issues.push(Issue::from_extract(err, role.as_str())),
                }
            }
        }

        for &role in self.standards.required_roles(Team::ChargeOfQuarters) {
            if !team.contains_key(&role) {
                issues.push(Issue::RoleRequired { role });
            }
        }
        for &role in self.standards.roles(Team::ChargeOfQuarters) {
            if role.is_multi_person() && team.get(&role).is_none_or(TeamMember::is_empty) {
                issues.push(Issue::AtLeastOneRequired { role });
            }
        }
        team
    }

    fn warn_unconfigured(&self, team: Team, entries: &BTreeMap<Role, RawTeamEntry>) {
        let configured = self.standards.roles(team);
        for role in entries.keys().filter(|role| !configured.contains(role)) {
            warn!(role = %role, team = %team, "ignoring role not configured for this team");
        }
    }

    fn extract_lates(
        &self,
        kind: LateKind,
        rows: &[RawLate],
        issues: &mut Vec<Issue>,
    ) -> Vec<LateEntry> {
        rows.iter()
            .enumerate()
            .filter_map(|(index, row)| self.extract_late(kind, index, row, issues))
            .collect()
    }

    fn extract_late(
        &self,
        kind: LateKind,
        index: usize,
        row: &RawLate,
        issues: &mut Vec<Issue>,
    ) -> Option<LateEntry> {
        let context = kind.row_context(index);
        let person = match extract_person(&row.person, &context) {
            Ok(person) => person,
            Err(err) => {
                issues.push(Issue::from_extract(err, &context));
                return None;
            }
        };
        if person.is_none() {
            if row.details_blank() {
                return None;
            }
            if self.mode.is_strict() {
                issues.push(Issue::IncompletePerson { context });
                return None;
            }
        }

        let time = row.time.trim();
        let reason = row.reason.trim();
        let late_type = match kind {
            LateKind::RedCard => row.late_type.trim(),
            LateKind::Standard => "",
        };

        self.warn_unlisted(kind, &context, time, late_type);
        let room = match self.mode {
            ExtractionMode::Strict => {
                let room = self.strict_room(&row.room, &context, issues);
                let mut missing = Vec::new();
                if row.room.trim().is_empty() {
                    missing.push("Room");
                }
                if time.is_empty() {
                    missing.push("Time");
                }
                if reason.is_empty() {
                    missing.push("Reason");
                }
                if kind == LateKind::RedCard && late_type.is_empty() {
                    missing.push("Type/Late To");
                }
                if !missing.is_empty() {
                    issues.push(Issue::LateFieldsMissing {
                        context: context.clone(),
                        fields: missing,
                    });
                    return None;
                }
                room?
            }
            ExtractionMode::Lenient => normalize_room_lenient(&row.room),
        };

        Some(LateEntry {
            person,
            room,
            time: time.to_string(),
            late_type: late_type.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Canonical room, or `None` after recording why it is unusable. A
    /// blank room is reported with the other missing fields.
    fn strict_room(&self, raw: &str, context: &str, issues: &mut Vec<Issue>) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        match normalize_room(raw) {
            Ok(room) => Some(room),
            Err(err) => {
                issues.push(Issue::from_extract(err, context));
                None
            }
        }
    }

    /// Blank values are left to the required-field checks.
    fn warn_unlisted(&self, kind: LateKind, context: &str, time: &str, late_type: &str) {
        if !time.is_empty() && !self.standards.late_times(kind).iter().any(|t| t == time) {
            warn!(context, time, "late time is not one of the configured options");
        }
        if kind == LateKind::RedCard
            && !late_type.is_empty()
            && !self.standards.red_card_types.iter().any(|t| t == late_type)
        {
            warn!(context, late_type, "late type is not one of the configured options");
        }
    }

    /// Only the field is logged; the values can be personnel names.
    fn warn_unlisted_options(&self, notes: &Notes, signature: &Signature) {
        let standards = self.standards;
        let checks = [
            ("on-call MTL", notes.on_call_mtl.as_str(), &standards.on_call_mtls),
            ("squadron", signature.squadron.as_str(), &standards.squadrons),
            ("AFSC/Job", signature.afsc_job.as_str(), &standards.jobs),
        ];
        for (field, value, options) in checks {
            if value.is_empty() || (field == "AFSC/Job" && value == standards.job_sentinel) {
                continue;
            }
            if !options.iter().any(|option| option == value) {
                warn!(field, "value is not one of the configured options");
            }
        }
    }

    fn check_signature(&self, signature: &Signature, issues: &mut Vec<Issue>) {
        let missing: Vec<SignatureField> = self
            .standards
            .required_signature_fields
            .iter()
            .copied()
            .filter(|field| signature.get(*field).is_empty())
            .collect();
        if !missing.is_empty() {
            issues.push(Issue::SignatureIncomplete { missing });
        }
    }
}

/// First row of a single-person role. Extra rows are dropped with a warning.
fn single_row(role: Role, entry: &RawTeamEntry) -> Option<&RawPerson> {
    let rows = entry.rows();
    if rows.len() > 1 {
        warn!(role = %role, ignored = rows.len() - 1, "extra rows ignored for single-person role");
    }
    rows.first().copied()
}

fn extract_notes(raw: &RawNotes) -> Notes {
    Notes {
        cac_scanner_unavailable: raw.cac_scanner,
        on_call_mtl: raw.on_call_mtl.trim().to_string(),
        additional_notes: raw
            .additional_notes
            .iter()
            .map(|note| note.trim())
            .filter(|note| !note.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn extract_signature(raw: &RawSignature) -> Signature {
    Signature {
        rank: raw.rank.trim().to_string(),
        last: raw.last.trim().to_string(),
        first: raw.first.trim().to_string(),
        mi: raw.mi.trim().to_string(),
        afsc_job: raw.afsc_job.trim().to_string(),
        squadron: raw.squadron.trim().to_string(),
    }
}

/// Extract with the embedded tables.
///
/// # Errors
///
/// Strict mode returns every problem found; lenient mode never fails.
pub fn extract_all(
    snapshot: &RawFieldSnapshot,
    mode: ExtractionMode,
) -> Result<FormRecord, ValidationFailed> {
    ExtractionContext::default().with_mode(mode).extract(snapshot)
}

/// Best-effort extraction for live preview. Never fails.
pub fn extract_preview(snapshot: &RawFieldSnapshot, standards: &Standards) -> FormRecord {
    ExtractionContext::new(standards)
        .with_mode(ExtractionMode::Lenient)
        .collect(snapshot)
        .0
}
