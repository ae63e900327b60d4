//! Report Builder — ranks matches per job description and renders the report.

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::errors::AtlasError;
use crate::scoring::aggregate::{JobMatches, MatchRecord};

pub const REPORT_TITLE: &str = "ATLAS: Automated Talent Locator and Assessor System";
pub const REPORT_SUBTITLE: &str = "Talent Assessment Report";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Matches sorted by combined score, highest first. Ties keep discovery order.
pub fn rank(matches: &[MatchRecord]) -> Vec<&MatchRecord> {
    let mut ranked: Vec<&MatchRecord> = matches.iter().collect();
    ranked.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
    ranked
}

/// Plain-text report. Job descriptions without any qualifying candidate are omitted.
pub fn render_text(results: &[JobMatches]) -> String {
    let mut out = format!("{REPORT_TITLE}\n{REPORT_SUBTITLE}\n\n");

    for group in results.iter().filter(|g| !g.matches.is_empty()) {
        out.push_str(&format!("Potential Candidates for {}:\n", group.job_description));
        for record in rank(&group.matches) {
            out.push_str(&format!("Candidate: {}\n", record.candidate));
            out.push_str(&format!("  Overall Match Score: {:.2}\n", record.combined_score));
            out.push_str(&format!("  Content Alignment: {:.2}\n", record.content_score));
            out.push_str(&format!("  Skill Match: {:.2}\n", record.skill_score));
            out.push_str(&format!("  Relevant Skills: {}\n\n", record.relevant_skills));
        }
        out.push('\n');
    }

    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    title: &'static str,
    scorer_backend: &'a str,
    threshold: f64,
    job_descriptions: Vec<JsonJobBlock<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonJobBlock<'a> {
    name: &'a str,
    candidates: Vec<&'a MatchRecord>,
}

/// JSON report: every job description, candidates ranked as in the text report.
pub fn render_json(
    results: &[JobMatches],
    scorer_backend: &str,
    threshold: f64,
) -> Result<String, AtlasError> {
    let report = JsonReport {
        title: REPORT_TITLE,
        scorer_backend,
        threshold,
        job_descriptions: results
            .iter()
            .map(|g| JsonJobBlock {
                name: &g.job_description,
                candidates: rank(&g.matches),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report).map_err(|e| AtlasError::Report(e.to_string()))
}

pub fn write_report(path: &Path, content: &str) -> Result<(), AtlasError> {
    std::fs::write(path, content)
        .map_err(|e| AtlasError::Report(format!("cannot write {}: {e}", path.display())))
}
