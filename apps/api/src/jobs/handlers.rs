//! Axum route handlers for public job browsing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{JobSearch, MatchMode};
use crate::errors::AppError;
use crate::jobs::search::{
    build_filter_options, filter_by_salary, paginate, skill_directory, FilterOptions, Pagination,
};
use crate::models::job::JobListing;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    pub search: Option<String>,
    pub query: Option<String>,
    pub query_match_mode: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl JobListQuery {
    fn to_search(&self) -> JobSearch {
        // `search` is the legacy name and wins when both are sent.
        let keyword = non_blank(self.search.as_deref()).or(non_blank(self.query.as_deref()));
        JobSearch {
            keyword,
            match_mode: MatchMode::parse(self.query_match_mode.as_deref()),
            location: non_blank(self.location.as_deref()),
            job_type: non_blank(self.job_type.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobListing>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub success: bool,
    pub data: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs (alias: /api/v1/jobs/search)
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    if let (Some(min), Some(max)) = (params.min_salary, params.max_salary) {
        if min > max {
            return Err(AppError::Validation(
                "minSalary cannot exceed maxSalary".to_string(),
            ));
        }
    }

    let search = params.to_search();
    let jobs = state.catalog.search_active(&search).await?;
    let jobs = filter_by_salary(jobs, params.min_salary, params.max_salary);
    let (page, pagination) = paginate(jobs, params.page, params.limit);

    info!(
        "Job search matched {} postings, returning page {}",
        pagination.total, pagination.current_page
    );

    Ok(Json(JobListResponse {
        jobs: page.into_iter().map(JobListing::from).collect(),
        pagination,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobListing>, AppError> {
    let job = state
        .catalog
        .get_job(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(JobListing::from(job)))
}

/// GET /api/v1/jobs/filters
pub async fn handle_job_filters(
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, AppError> {
    let rows = state.catalog.active_job_facets().await?;
    Ok(Json(build_filter_options(&rows)))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillsQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let (job_skills, candidate_skills) = tokio::try_join!(
        state.catalog.job_skill_lists(),
        state.profiles.declared_skill_lists()
    )?;

    let mut lists = job_skills;
    lists.extend(candidate_skills);

    Ok(Json(SkillsResponse {
        success: true,
        data: skill_directory(&lists, params.query.as_deref()),
    }))
}
