//! Warn-level events for values the form accepts but the tables do not list.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cq_model::{ExtractionMode, RawFieldSnapshot, RawPerson, RawTeamEntry, Role};
use cq_standards::Standards;
use cq_validate::{extract_all, extract_preview};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<T>(run: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, run);
    (value, logs.text())
}

fn complete_snapshot() -> RawFieldSnapshot {
    serde_json::from_str(include_str!("fixtures/complete.json")).expect("parse fixture")
}

#[test]
fn complete_snapshot_logs_no_warnings() {
    let (result, logs) =
        with_captured_logs(|| extract_all(&complete_snapshot(), ExtractionMode::Strict));
    assert!(result.is_ok());
    assert_eq!(logs, "");
}

#[test]
fn unlisted_late_time_is_warned_in_both_modes() {
    let mut snapshot = complete_snapshot();
    snapshot.red_card_lates[0].time = "0430".to_string();

    let (strict, strict_logs) =
        with_captured_logs(|| extract_all(&snapshot, ExtractionMode::Strict));
    let (preview, preview_logs) =
        with_captured_logs(|| extract_preview(&snapshot, Standards::embedded()));

    assert_eq!(strict.expect("still accepted").red_card_lates[0].time, "0430");
    assert_eq!(preview.red_card_lates[0].time, "0430");
    for logs in [&strict_logs, &preview_logs] {
        assert!(logs.contains("late time is not one of the configured options"));
        assert!(logs.contains("0430"));
        assert!(logs.contains("Red-Card Lates Row 1"));
    }
}

#[test]
fn blank_late_time_is_not_warned() {
    let mut snapshot = complete_snapshot();
    snapshot.red_card_lates[0].time.clear();

    let (result, logs) = with_captured_logs(|| extract_all(&snapshot, ExtractionMode::Strict));

    assert!(result.is_err());
    assert!(!logs.contains("late time"));
}

#[test]
fn unlisted_notes_and_signature_options_are_warned_without_values() {
    let mut snapshot = complete_snapshot();
    snapshot.notes.on_call_mtl = "MSgt Avery".to_string();
    snapshot.signature.squadron = "999th".to_string();
    snapshot.signature.afsc_job = "Not Available".to_string();

    let (result, logs) = with_captured_logs(|| extract_all(&snapshot, ExtractionMode::Lenient));

    assert!(result.is_ok());
    assert!(logs.contains("on-call MTL"));
    assert!(logs.contains("squadron"));
    assert!(!logs.contains("AFSC/Job"));
    assert!(!logs.contains("Avery"));
}

#[test]
fn extra_rows_for_single_person_role_are_warned() {
    let mut snapshot = complete_snapshot();
    snapshot.al_team.insert(
        Role::AlCards,
        RawTeamEntry::Many(vec![
            RawPerson::new("E-3 (A1C)", "garcia", "maria", "l"),
            RawPerson::new("E-2 (Amn)", "ortiz", "ana", ""),
        ]),
    );

    let (result, logs) = with_captured_logs(|| extract_all(&snapshot, ExtractionMode::Strict));

    let record = result.expect("first row is used");
    assert_eq!(record.al_team[&Role::AlCards].last, "Garcia");
    assert!(logs.contains("extra rows ignored for single-person role"));
    assert!(logs.contains("AL Cards"));
    assert!(!logs.contains("Ortiz") && !logs.contains("ortiz"));
}
