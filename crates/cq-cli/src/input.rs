//! Snapshot input and the blank template document.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cq_model::{RawFieldSnapshot, RawLate, RawNotes, RawPerson, RawTeamEntry, Team};
use cq_standards::{Standards, resolve_standards_path};
use tracing::debug;

/// Path argument that means "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Read a JSON snapshot from a file, or from stdin when the path is `-`.
pub fn read_snapshot(source: &Path) -> Result<RawFieldSnapshot> {
    let text = if source.as_os_str() == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read snapshot from stdin")?;
        text
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("read snapshot {}", source.display()))?
    };
    parse_snapshot(&text)
}

pub fn parse_snapshot(text: &str) -> Result<RawFieldSnapshot> {
    serde_json::from_str(text).context("parse snapshot JSON")
}

/// Active tables: the explicit path, then `CQ_STANDARDS_FILE`, then the
/// embedded defaults.
pub fn load_standards(explicit: Option<PathBuf>) -> Result<Standards> {
    match resolve_standards_path(explicit) {
        Some(path) => Standards::load(&path)
            .with_context(|| format!("load standards {}", path.display())),
        None => {
            debug!("using embedded standards");
            Ok(Standards::embedded().clone())
        }
    }
}

/// An empty snapshot with every configured role, one blank runner, one
/// blank late row of each kind and one blank note.
pub fn blank_template(standards: &Standards) -> RawFieldSnapshot {
    let mut snapshot = RawFieldSnapshot::default();
    for &role in standards.roles(Team::AirmanLeader) {
        snapshot
            .al_team
            .insert(role, RawTeamEntry::Single(RawPerson::default()));
    }
    for &role in standards.roles(Team::ChargeOfQuarters) {
        let entry = if role.is_multi_person() {
            RawTeamEntry::Many(vec![RawPerson::default()])
        } else {
            RawTeamEntry::Single(RawPerson::default())
        };
        snapshot.cq_team.insert(role, entry);
    }
    snapshot.red_card_lates.push(RawLate::default());
    snapshot.lates.push(RawLate::default());
    snapshot.notes = RawNotes {
        additional_notes: vec![String::new()],
        ..RawNotes::default()
    };
    snapshot
}
