#![allow(dead_code)]

//! Match Aggregator — turns (job description × resume) pairs into thresholded matches.
//!
//! Per pair:
//! 1. skill_score = |skills(JD) ∩ skills(CV)| / |skills(JD)| × 100 (0 if the JD has no skills)
//! 2. content_score = scorer.score(JD text, CV text)
//! 3. combined = content × 0.6 + skill × 0.4
//! 4. keep if combined ≥ threshold
//!
//! Pairs are independent: no normalization across the resume pool.

use serde::Serialize;
use tracing::debug;

use crate::models::document::{JobDescriptionEntry, ResumeEntry};
use crate::scoring::similarity::SimilarityScorer;
use crate::skills::SkillSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub content: f64,
    pub skill: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            content: 0.6,
            skill: 0.4,
        }
    }
}

/// Percentage of the job's skills the resume also has.
pub fn compute_skill_score(job_skills: &SkillSet, resume_skills: &SkillSet) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }
    let matched = job_skills.intersection(resume_skills).len();
    matched as f64 / job_skills.len() as f64 * 100.0
}

pub fn compute_combined_score(content: f64, skill: f64, weights: &ScoringWeights) -> f64 {
    content * weights.content + skill * weights.skill
}

/// One qualifying candidate for one job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub candidate: String,
    pub combined_score: f64,
    pub content_score: f64,
    pub skill_score: f64,
    /// skills(JD) ∩ skills(resume), in lexicon order
    pub relevant_skills: SkillSet,
}

/// All matches for one job description, in discovery order (unsorted).
#[derive(Debug, Clone, PartialEq)]
pub struct JobMatches {
    pub job_description: String,
    pub matches: Vec<MatchRecord>,
}

/// Scores of a single pair, whether or not it clears the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PairScore {
    content: f64,
    skill: f64,
    combined: f64,
}

/// Accumulates matches one resume at a time against a fixed job-description corpus.
///
/// Job texts are normalized once up front; each resume is normalized once per `add_resume`.
pub struct MatchAggregator<'a> {
    scorer: &'a dyn SimilarityScorer,
    weights: ScoringWeights,
    threshold: f64,
    jobs: &'a [JobDescriptionEntry],
    normalized_jobs: Vec<String>,
    groups: Vec<JobMatches>,
}

impl<'a> MatchAggregator<'a> {
    pub fn new(
        scorer: &'a dyn SimilarityScorer,
        weights: ScoringWeights,
        threshold: f64,
        jobs: &'a [JobDescriptionEntry],
    ) -> Self {
        let policy = scorer.policy();
        Self {
            scorer,
            weights,
            threshold,
            jobs,
            normalized_jobs: jobs.iter().map(|jd| policy.apply(&jd.text)).collect(),
            groups: jobs
                .iter()
                .map(|jd| JobMatches {
                    job_description: jd.name.clone(),
                    matches: Vec::new(),
                })
                .collect(),
        }
    }

    fn score_normalized(
        &self,
        job: &JobDescriptionEntry,
        normalized_job: &str,
        resume: &ResumeEntry,
        normalized_resume: &str,
    ) -> PairScore {
        let skill = compute_skill_score(&job.skills, &resume.skills);
        let content = self.scorer.score_normalized(normalized_job, normalized_resume);
        PairScore {
            content,
            skill,
            combined: compute_combined_score(content, skill, &self.weights),
        }
    }

    /// Scores `resume` against every job description, recording those at or above threshold.
    /// Returns how many job descriptions it qualified for.
    pub fn add_resume(&mut self, resume: &ResumeEntry) -> usize {
        let normalized_resume = self.scorer.policy().apply(&resume.text);
        let jobs = self.jobs;
        let mut qualified = 0;

        for (index, job) in jobs.iter().enumerate() {
            let score = self.score_normalized(
                job,
                &self.normalized_jobs[index],
                resume,
                &normalized_resume,
            );

            debug!(
                "Match scores for {} against {}: content={:.2} skill={:.2} combined={:.2}",
                resume.name, job.name, score.content, score.skill, score.combined
            );

            if score.combined >= self.threshold {
                self.groups[index].matches.push(MatchRecord {
                    candidate: resume.name.clone(),
                    combined_score: score.combined,
                    content_score: score.content,
                    skill_score: score.skill,
                    relevant_skills: job.skills.intersection(&resume.skills),
                });
                qualified += 1;
            }
        }

        qualified
    }

    /// One group per job description, in job order.
    pub fn finish(self) -> Vec<JobMatches> {
        self.groups
    }
}
