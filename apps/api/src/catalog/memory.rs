//! In-memory store mirroring the `PgStore` query semantics, for router tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{JobCatalog, JobSearch, MatchMode, ProfileReader, RecommendationQuery};
use crate::errors::AppError;
use crate::models::company::Company;
use crate::models::job::{JobFacetRow, JobPosting, JobStatus};
use crate::models::profile::CandidateProfile;

#[derive(Default)]
pub struct MemoryStore {
    pub companies: Vec<Company>,
    pub jobs: Vec<JobPosting>,
    pub profiles: Vec<CandidateProfile>,
    /// When set, every call fails as if the database were unreachable.
    pub unavailable: bool,
}

impl MemoryStore {
    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// Active postings, most recently updated first.
    fn active_by_recency(&self) -> Vec<JobPosting> {
        let mut jobs: Vec<JobPosting> = self
            .jobs
            .iter()
            .filter(|j| j.status == JobStatus::Active)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        jobs
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_recommendation(query: &RecommendationQuery, job: &JobPosting) -> bool {
    let by_location = query.location.as_deref().map(|l| contains_ci(&job.location, l));
    let by_skills = query
        .skills_any_of
        .as_ref()
        .map(|skills| job.skills.iter().any(|s| skills.contains(s)));
    match (by_location, by_skills) {
        (None, None) => true,
        (l, s) => l.unwrap_or(false) || s.unwrap_or(false),
    }
}

fn matches_search(search: &JobSearch, job: &JobPosting) -> bool {
    let keyword_ok = match search.keyword.as_deref() {
        None => true,
        Some(k) => match search.match_mode {
            MatchMode::Partial => contains_ci(&job.title, k) || contains_ci(&job.description, k),
            MatchMode::Exact => {
                job.title.to_lowercase() == k.to_lowercase()
                    || job.description.to_lowercase() == k.to_lowercase()
            }
        },
    };
    let location_ok = search
        .location
        .as_deref()
        .map_or(true, |l| contains_ci(&job.location, l));
    let type_ok = search
        .job_type
        .as_deref()
        .map_or(true, |t| job.job_type.code() == t);
    keyword_ok && location_ok && type_ok
}

#[async_trait]
impl JobCatalog for MemoryStore {
    async fn recommendation_candidates(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<JobPosting>, AppError> {
        self.check()?;
        Ok(self
            .active_by_recency()
            .into_iter()
            .filter(|j| matches_recommendation(query, j))
            .take(query.limit.max(0) as usize)
            .collect())
    }

    async fn search_active(&self, search: &JobSearch) -> Result<Vec<JobPosting>, AppError> {
        self.check()?;
        Ok(self
            .active_by_recency()
            .into_iter()
            .filter(|j| matches_search(search, j))
            .collect())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        self.check()?;
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn active_job_facets(&self) -> Result<Vec<JobFacetRow>, AppError> {
        self.check()?;
        Ok(self
            .active_by_recency()
            .into_iter()
            .map(|j| JobFacetRow {
                location: j.location,
                skills: j.skills,
            })
            .collect())
    }

    async fn job_skill_lists(&self) -> Result<Vec<Vec<String>>, AppError> {
        self.check()?;
        Ok(self.jobs.iter().map(|j| j.skills.clone()).collect())
    }

    async fn list_companies(&self, name: Option<&str>) -> Result<Vec<Company>, AppError> {
        self.check()?;
        let mut companies: Vec<Company> = self
            .companies
            .iter()
            .filter(|c| name.map_or(true, |n| contains_ci(&c.name, n)))
            .cloned()
            .collect();
        companies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(companies)
    }

    async fn get_company(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        self.check()?;
        Ok(self.companies.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl ProfileReader for MemoryStore {
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        self.check()?;
        Ok(self.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn declared_skill_lists(&self) -> Result<Vec<Vec<String>>, AppError> {
        self.check()?;
        Ok(self.profiles.iter().filter_map(|p| p.skills.clone()).collect())
    }
}
