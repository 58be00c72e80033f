use std::io::Write;

use anyhow::{Context, Result};
use cq_model::ExtractionMode;
use cq_report::{generate_email, preview_email};
use cq_standards::Standards;
use cq_validate::{ExtractionContext, lookup_mtl_in, normalize_room};
use tracing::{info, info_span};

use cq_cli::input::{blank_template, read_snapshot};

use crate::cli::{GenerateArgs, MtlArgs, SnapshotArgs};
use crate::summary::{print_bay_table, print_issue_table, print_option_table, print_rank_table};
use crate::types::Outcome;

pub fn run_generate(args: &GenerateArgs, standards: &Standards) -> Result<Outcome> {
    let span = info_span!("generate");
    let _guard = span.enter();
    let snapshot = read_snapshot(&args.input.snapshot)?;
    let email = match generate_email(&snapshot, standards) {
        Ok(email) => email,
        Err(failed) => {
            eprintln!("{}", failed.dialog_text());
            eprintln!();
            print_issue_table(&failed);
            return Ok(Outcome::Invalid);
        }
    };
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{email}\n"))
                .with_context(|| format!("write email {}", path.display()))?;
            info!(path = %path.display(), "wrote email");
        }
        None => print_stdout(&email)?,
    }
    Ok(Outcome::Success)
}

pub fn run_check(args: &SnapshotArgs, standards: &Standards) -> Result<Outcome> {
    let snapshot = read_snapshot(&args.snapshot)?;
    match ExtractionContext::new(standards)
        .with_mode(ExtractionMode::Strict)
        .extract(&snapshot)
    {
        Ok(_) => {
            println!("No problems found.");
            Ok(Outcome::Success)
        }
        Err(failed) => {
            print_issue_table(&failed);
            Ok(Outcome::Invalid)
        }
    }
}

pub fn run_preview(args: &SnapshotArgs, standards: &Standards) -> Result<Outcome> {
    let snapshot = read_snapshot(&args.snapshot)?;
    print_stdout(&preview_email(&snapshot, standards))?;
    Ok(Outcome::Success)
}

pub fn run_mtl(args: &MtlArgs, standards: &Standards) -> Result<Outcome> {
    let (room, outcome) = match normalize_room(&args.room) {
        Ok(room) => (room, Outcome::Success),
        Err(err) => {
            eprintln!("error: {err}");
            (args.room.trim().to_string(), Outcome::Invalid)
        }
    };
    println!("Room: {room}");
    println!("MTL: {}", lookup_mtl_in(standards, &args.manor, &room));
    Ok(outcome)
}

pub fn run_tables(standards: &Standards) -> Result<Outcome> {
    print_rank_table(standards);
    println!();
    print_bay_table(standards);
    println!();
    print_option_table(standards);
    Ok(Outcome::Success)
}

pub fn run_template(standards: &Standards) -> Result<Outcome> {
    let template = blank_template(standards);
    let json = serde_json::to_string_pretty(&template).context("serialize template")?;
    print_stdout(&json)?;
    Ok(Outcome::Success)
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("write to stdout")?;
    stdout.flush().context("flush stdout")
}
