//! Data-access seam for job postings and candidate profiles.
//!
//! `AppState` holds these as `Arc<dyn JobCatalog>` / `Arc<dyn ProfileReader>`.
//! Production uses `PgStore`; tests use the in-memory store.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::Company;
use crate::models::job::{JobFacetRow, JobPosting};
use crate::models::profile::CandidateProfile;

pub use postgres::PgStore;

/// Loose pre-filter for recommendation candidates.
///
/// A posting qualifies when it matches ANY present criterion. With no criteria
/// every active posting qualifies. Results come back most recently updated
/// first, at most `limit` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub location: Option<String>,
    pub skills_any_of: Option<Vec<String>>,
    pub limit: i64,
}

impl RecommendationQuery {
    pub fn for_candidate(profile: &CandidateProfile, skills: &[String], limit: i64) -> Self {
        RecommendationQuery {
            location: profile.match_location().map(str::to_string),
            skills_any_of: (!skills.is_empty()).then(|| skills.to_vec()),
            limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Partial,
    Exact,
}

impl MatchMode {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("exact") => MatchMode::Exact,
            _ => MatchMode::Partial,
        }
    }
}

/// Non-salary criteria of a job search. Salary bounds are applied after the
/// catalog query, see `jobs::search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearch {
    pub keyword: Option<String>,
    pub match_mode: MatchMode,
    pub location: Option<String>,
    pub job_type: Option<String>,
}

#[async_trait]
pub trait JobCatalog: Send + Sync {
    async fn recommendation_candidates(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<JobPosting>, AppError>;

    /// Active postings matching `search`, most recently updated first.
    async fn search_active(&self, search: &JobSearch) -> Result<Vec<JobPosting>, AppError>;

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError>;

    async fn active_job_facets(&self) -> Result<Vec<JobFacetRow>, AppError>;

    /// Skill arrays of every posting regardless of status.
    async fn job_skill_lists(&self) -> Result<Vec<Vec<String>>, AppError>;

    /// Companies whose name contains `name` (case-insensitive), newest first.
    async fn list_companies(&self, name: Option<&str>) -> Result<Vec<Company>, AppError>;

    async fn get_company(&self, id: Uuid) -> Result<Option<Company>, AppError>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError>;

    /// Declared skills of every candidate; undeclared profiles are skipped.
    async fn declared_skill_lists(&self) -> Result<Vec<Vec<String>>, AppError>;
}
