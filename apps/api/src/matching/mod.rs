// Job recommendations: profile lookup, catalog pre-filter, ranking.
// The ranker is pure; all I/O goes through the catalog traits.

pub mod handlers;
pub mod ranker;

use tracing::info;
use uuid::Uuid;

use crate::catalog::{JobCatalog, ProfileReader, RecommendationQuery};
use crate::errors::AppError;

pub use ranker::{rank_jobs, Recommendation};

pub const PROFILE_INCOMPLETE_MESSAGE: &str = "Complete your profile to get recommendations";

#[derive(Debug)]
pub enum RecommendationOutcome {
    /// No profile, or skills never declared. The catalog was not queried.
    ProfileIncomplete,
    Ranked(Vec<Recommendation>),
}

pub async fn recommend_for_candidate(
    profiles: &dyn ProfileReader,
    catalog: &dyn JobCatalog,
    user_id: Uuid,
    limit: i64,
) -> Result<RecommendationOutcome, AppError> {
    let Some(profile) = profiles.find_profile(user_id).await? else {
        info!("No candidate profile for user {user_id}");
        return Ok(RecommendationOutcome::ProfileIncomplete);
    };
    let Some(skills) = profile.skills.as_deref() else {
        info!("Candidate {user_id} has not declared skills");
        return Ok(RecommendationOutcome::ProfileIncomplete);
    };

    let query = RecommendationQuery::for_candidate(&profile, skills, limit);
    let jobs = catalog.recommendation_candidates(&query).await?;
    let recommendations = rank_jobs(skills, jobs);

    info!(
        "Ranked {} recommendations for user {user_id}",
        recommendations.len()
    );
    Ok(RecommendationOutcome::Ranked(recommendations))
}
