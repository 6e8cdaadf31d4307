pub mod health;

use axum::{routing::get, Router};

use crate::companies::handlers as companies;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job browsing
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/search", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/filters", get(jobs::handle_job_filters))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/skills", get(jobs::handle_list_skills))
        // Company directory
        .route("/api/v1/companies", get(companies::handle_list_companies))
        .route("/api/v1/companies/:id", get(companies::handle_get_company))
        // Job seeker
        .route(
            "/api/v1/jobseeker/recommendations",
            get(matching::handle_recommendations),
        )
        .route("/api/v1/jobseeker/profile", get(matching::handle_get_profile))
        .with_state(state)
}
