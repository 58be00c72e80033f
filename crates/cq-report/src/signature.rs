use cq_model::Signature;
use cq_standards::Standards;

use crate::person::name_line;

/// Render the closing block: salutation, name line, job, squadron and the
/// closing location. Empty when the signature is entirely blank.
///
/// The job line is skipped when blank or set to the "not available"
/// sentinel; the squadron line when blank.
pub fn render_signature(signature: &Signature, standards: &Standards) -> Vec<String> {
    if signature.is_empty() {
        return Vec::new();
    }
    let abbreviation = standards.rank_abbreviation(&signature.rank).unwrap_or("");
    let mut lines = vec![
        "V/r".to_string(),
        name_line(abbreviation, &signature.last, &signature.first, &signature.mi),
    ];
    let job = signature.afsc_job.trim();
    if !job.is_empty() && job != standards.job_sentinel {
        lines.push(job.to_string());
    }
    let squadron = signature.squadron.trim();
    if !squadron.is_empty() {
        lines.push(format!("{squadron} Training Squadron"));
    }
    lines.push(standards.closing_location.clone());
    lines
}
