//! Recommendation ranker: scores catalog postings against a candidate's skills.
//!
//! Pure and synchronous. The catalog has already filtered and truncated the
//! postings; the ranker only scores them and re-sorts.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::job::{JobListing, JobPosting};

/// Score given to every posting when the candidate declared no skills.
pub const NEUTRAL_MATCH_SCORE: u32 = 50;

/// A posting as presented to the candidate, with its match details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub listing: JobListing,
    pub match_score: u32, // 0-100
    pub matching_skills: Vec<String>,
}

/// Scores each posting and sorts by descending match score.
///
/// Algorithm:
/// 1. matching_skills = job skills that the candidate also declared (exact,
///    case-sensitive), in the job's order, without duplicates
/// 2. match_score = round(100 × |matching_skills| / |candidate skills|),
///    or `NEUTRAL_MATCH_SCORE` when the candidate has no skills
/// 3. Stable sort, so equal scores keep catalog order
pub fn rank_jobs(candidate_skills: &[String], jobs: Vec<JobPosting>) -> Vec<Recommendation> {
    let candidate: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();

    let mut recommendations: Vec<Recommendation> = jobs
        .into_iter()
        .map(|job| {
            let matching_skills = matching_skills(&candidate, &job.skills);
            let match_score = match_score(matching_skills.len(), candidate.len());
            Recommendation {
                listing: JobListing::from(job),
                match_score,
                matching_skills,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommendations
}

fn matching_skills(candidate: &HashSet<&str>, job_skills: &[String]) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();
    for skill in job_skills {
        if candidate.contains(skill.as_str()) && !matched.contains(skill) {
            matched.push(skill.clone());
        }
    }
    matched
}

/// Integer percentage rounded half-up. `matched` never exceeds `total` because
/// both sides are deduplicated.
fn match_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return NEUTRAL_MATCH_SCORE;
    }
    let score = (200 * matched + total) / (2 * total);
    score.min(100) as u32
}
