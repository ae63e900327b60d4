#![allow(dead_code)]

//! Batch run: enumerate folders, score every resume against every job description,
//! write the ranked report.
//!
//! Job descriptions are all extracted and skill-tagged before the first resume is read.
//! Resumes are then processed one at a time against every job description.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::{AtlasError, FolderKind};
use crate::extract::DocumentFormat;
use crate::models::document::{Document, JobDescriptionEntry, ResumeEntry};
use crate::report::{render_json, render_text, write_report, ReportFormat};
use crate::scoring::aggregate::{JobMatches, MatchAggregator, ScoringWeights};
use crate::skills::SkillLexicon;

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub job_descriptions: usize,
    pub resumes_seen: usize,
    pub resumes_skipped: usize,
    pub matches: usize,
    pub report_path: PathBuf,
    pub results: Vec<JobMatches>,
}

/// Regular files in `dir`, sorted by file name so runs are reproducible.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, AtlasError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn require_folder(kind: FolderKind, path: &Path) -> Result<(), AtlasError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(AtlasError::MissingFolder {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Loads every job description with a recognized extension and non-empty text.
pub fn load_job_descriptions(
    dir: &Path,
    lexicon: &SkillLexicon,
) -> Result<Vec<JobDescriptionEntry>, AtlasError> {
    require_folder(FolderKind::JobDescriptions, dir)?;

    info!("Analyzing job descriptions...");
    let mut jobs = Vec::new();
    for path in list_files(dir)? {
        if !DocumentFormat::from_path(&path).is_recognized() {
            continue;
        }
        let doc = Document::load(&path);
        match JobDescriptionEntry::from_document(doc, lexicon) {
            Some(jd) => {
                info!("Extracted skills from {}: {}", jd.name, jd.skills);
                jobs.push(jd);
            }
            None => warn!("Skipping job description {} due to reading error", path.display()),
        }
    }

    if jobs.is_empty() {
        return Err(AtlasError::NoJobDescriptions(dir.to_path_buf()));
    }
    Ok(jobs)
}

/// Scores every resume in `dir` against `jobs`.
///
/// Returns the per-job groups plus (seen, skipped) resume counts.
pub fn match_resumes(
    dir: &Path,
    jobs: &[JobDescriptionEntry],
    lexicon: &SkillLexicon,
    config: &Config,
) -> Result<(Vec<JobMatches>, usize, usize), AtlasError> {
    require_folder(FolderKind::Resumes, dir)?;

    let scorer = config.strategy.scorer();
    let mut aggregator =
        MatchAggregator::new(scorer.as_ref(), ScoringWeights::default(), config.threshold, jobs);

    info!("Commencing resume analysis (scorer: {})...", scorer.backend());
    let files = list_files(dir)?;
    let mut skipped = 0;
    for path in &files {
        info!("Processing resume: {}", path.display());
        let doc = Document::load(path);
        let Some(resume) = ResumeEntry::from_document(doc, lexicon) else {
            warn!("Skipping {} due to reading error", path.display());
            skipped += 1;
            continue;
        };
        info!("Extracted skills from resume {}: {}", resume.name, resume.skills);
        aggregator.add_resume(&resume);
    }

    Ok((aggregator.finish(), files.len(), skipped))
}

/// Full run: job descriptions → resumes → report file.
pub fn run(config: &Config, lexicon: &SkillLexicon) -> Result<RunSummary, AtlasError> {
    let jobs = load_job_descriptions(&config.jd_dir, lexicon)?;
    let (results, resumes_seen, resumes_skipped) =
        match_resumes(&config.resume_dir, &jobs, lexicon, config)?;

    info!("Generating talent assessment report...");
    let content = match config.format {
        ReportFormat::Text => render_text(&results),
        ReportFormat::Json => {
            render_json(&results, config.strategy.scorer().backend(), config.threshold)?
        }
    };
    write_report(&config.output_path, &content)?;

    let matches = results.iter().map(|g| g.matches.len()).sum();
    info!(
        "Analysis complete. Processed {} resumes against {} job descriptions.",
        resumes_seen,
        jobs.len()
    );
    info!(
        "Talent assessment report generated at {}",
        config.output_path.display()
    );

    Ok(RunSummary {
        job_descriptions: jobs.len(),
        resumes_seen,
        resumes_skipped,
        matches,
        report_path: config.output_path.clone(),
        results,
    })
}
