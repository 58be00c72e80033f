//! End-to-end rendering tests: snapshot in, email text out.

use cq_model::{RawFieldSnapshot, RawLate, RawPerson, RawSignature, RawTeamEntry, Role};
use cq_report::{generate_email, preview_email};
use cq_standards::Standards;
use proptest::prelude::*;

fn complete_snapshot() -> RawFieldSnapshot {
    serde_json::from_str(include_str!("fixtures/complete.json")).expect("parse fixture")
}

#[test]
fn complete_form_renders_full_email() {
    let email = generate_email(&complete_snapshot(), Standards::embedded()).expect("valid form");
    insta::assert_snapshot!("complete_form_email", email);
}

#[test]
fn strict_generation_reports_every_problem() {
    let mut snapshot = complete_snapshot();
    snapshot.manor.clear();
    snapshot.signature.squadron.clear();

    let failed = generate_email(&snapshot, Standards::embedded()).expect_err("should fail");

    assert_eq!(
        failed.messages(),
        vec![
            "Please select a Manor (Winters or Fosters).",
            "Signature section requires all inputs. Missing: Squadron.",
        ]
    );
}

#[test]
fn preview_of_blank_form_shows_placeholders() {
    let email = preview_email(&RawFieldSnapshot::default(), Standards::embedded());
    assert_eq!(
        email,
        "AL Cards:\n\
         \n\
         CQ Lead:\n\
         CQ Door Guard:\n\
         CQ Runner:\n\
         \n\
         Red-Card Lates:\n\
         - N/A\n\
         \n\
         Lates:\n\
         - N/A\n\
         \n\
         Notes:\n\
         - N/A"
    );
}

#[test]
fn preview_renders_anonymous_red_card_late() {
    let mut snapshot = RawFieldSnapshot {
        manor: "Winters".to_string(),
        ..RawFieldSnapshot::default()
    };
    snapshot.cq_team.insert(
        Role::CqLead,
        RawTeamEntry::Single(RawPerson::new("E-4 (SrA)", "Smith", "John", "Q")),
    );
    snapshot.red_card_lates.push(RawLate {
        room: "c116".to_string(),
        time: "0900".to_string(),
        late_type: "Both".to_string(),
        ..RawLate::default()
    });

    let email = preview_email(&snapshot, Standards::embedded());

    assert!(email.contains("CQ Lead: SrA Smith, John Q"));
    assert!(email.contains(
        "Red-Card Lates:\n- N/A - C116 - SSgt Seifert - Missed 0900 Sign-in & Turn-in - No reason provided"
    ));
    assert!(email.ends_with("Notes:\n- N/A"));
}

#[test]
fn preview_never_contains_trailing_blank_line() {
    let email = preview_email(&complete_snapshot(), Standards::embedded());
    assert!(!email.ends_with('\n'));
    assert!(email.ends_with("Keesler AFB, MS"));
}

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "smith", "O'NEIL", " lee ", "garcia-ruiz"]).prop_map(str::to_string)
}

fn rank() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "E-1 (AB)", "E-4 (SrA)", "E-3 (Spc3)", "O-1"])
        .prop_map(str::to_string)
}

fn raw_person() -> impl Strategy<Value = RawPerson> {
    (rank(), name(), name(), name()).prop_map(|(rank, last, first, mi)| RawPerson {
        rank,
        last,
        first,
        mi,
    })
}

fn raw_late() -> impl Strategy<Value = RawLate> {
    (
        raw_person(),
        prop::sample::select(vec!["", "c 1-16", "b205", "Z999", "d3-01"]),
        prop::sample::select(vec!["", "0900", "2200"]),
        prop::sample::select(vec!["", "Both", "Sign-in"]),
        name(),
    )
        .prop_map(|(person, room, time, late_type, reason)| RawLate {
            person,
            room: room.to_string(),
            time: time.to_string(),
            late_type: late_type.to_string(),
            reason,
        })
}

fn raw_snapshot() -> impl Strategy<Value = RawFieldSnapshot> {
    (
        prop::sample::select(vec!["", "Winters", "Fosters"]),
        raw_person(),
        raw_person(),
        prop::collection::vec(raw_person(), 0..3),
        prop::collection::vec(raw_late(), 0..3),
        prop::collection::vec(raw_late(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(manor, cards, lead, runners, red_card_lates, lates, signed)| {
            let mut snapshot = RawFieldSnapshot {
                manor: manor.to_string(),
                red_card_lates,
                lates,
                ..RawFieldSnapshot::default()
            };
            if signed {
                snapshot.signature = RawSignature {
                    rank: "E-4 (SrA)".to_string(),
                    last: "Smith".to_string(),
                    first: "John".to_string(),
                    mi: "Q".to_string(),
                    afsc_job: "Not Available".to_string(),
                    squadron: "81st".to_string(),
                };
            }
            snapshot.al_team.insert(Role::AlCards, RawTeamEntry::Single(cards));
            snapshot.cq_team.insert(Role::CqLead, RawTeamEntry::Single(lead.clone()));
            snapshot.cq_team.insert(Role::CqDoorGuard, RawTeamEntry::Single(lead));
            snapshot.cq_team.insert(Role::CqRunner, RawTeamEntry::Many(runners));
            snapshot
        })
}

proptest! {
    #[test]
    fn preview_is_deterministic(snapshot in raw_snapshot()) {
        let standards = Standards::embedded();
        let first = preview_email(&snapshot, standards);
        let second = preview_email(&snapshot, standards);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.ends_with('\n'));
        prop_assert!(first.contains("Red-Card Lates:"));
        prop_assert!(first.contains("CQ Runner:"));
    }

    #[test]
    fn strict_success_matches_preview(snapshot in raw_snapshot()) {
        let standards = Standards::embedded();
        if let Ok(email) = generate_email(&snapshot, standards) {
            prop_assert_eq!(email, preview_email(&snapshot, standards));
        }
    }
}
