use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{
    recommend_for_candidate, Recommendation, RecommendationOutcome, PROFILE_INCOMPLETE_MESSAGE,
};
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RecommendationOutcome> for RecommendationsResponse {
    fn from(outcome: RecommendationOutcome) -> Self {
        match outcome {
            RecommendationOutcome::ProfileIncomplete => RecommendationsResponse {
                recommendations: vec![],
                message: Some(PROFILE_INCOMPLETE_MESSAGE.to_string()),
            },
            RecommendationOutcome::Ranked(recommendations) => RecommendationsResponse {
                recommendations,
                message: None,
            },
        }
    }
}

/// GET /api/v1/jobseeker/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let outcome = recommend_for_candidate(
        state.profiles.as_ref(),
        state.catalog.as_ref(),
        params.user_id,
        state.config.recommendation_limit,
    )
    .await?;
    Ok(Json(outcome.into()))
}

/// GET /api/v1/jobseeker/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CandidateProfile>, AppError> {
    let user_id = params.user_id;
    let profile = state
        .profiles
        .find_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(profile))
}
