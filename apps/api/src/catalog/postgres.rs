use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::{JobCatalog, JobSearch, MatchMode, ProfileReader, RecommendationQuery};
use crate::errors::AppError;
use crate::models::company::Company;
use crate::models::job::{JobFacetRow, JobPosting, JobRow};
use crate::models::profile::{parse_skills, CandidateProfile, CandidateProfileRow};

const JOB_SELECT: &str = r#"
    SELECT j.id, j.title, j.description, j.location, j.type AS job_type, j.skills,
           j.salary, j.status, j.company_id, c.name AS company_name,
           c.logo_url AS company_logo_url, j.created_at, j.updated_at
    FROM jobs j
    JOIN companies c ON c.id = j.company_id
"#;

/// Postgres-backed implementation of both data-access traits.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgStore {
    async fn recommendation_candidates(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<JobPosting>, AppError> {
        debug!(
            "Recommendation query: location={:?} skills={:?} limit={}",
            query.location, query.skills_any_of, query.limit
        );

        // Substring tests use position() so user input never acts as a LIKE pattern.
        let sql = format!(
            r#"{JOB_SELECT}
            WHERE j.status = 'ACTIVE'
              AND (
                    ($1::text IS NULL AND $2::text[] IS NULL)
                 OR ($1::text IS NOT NULL AND position(lower($1) IN lower(j.location)) > 0)
                 OR ($2::text[] IS NOT NULL AND j.skills && $2::text[])
              )
            ORDER BY j.updated_at DESC
            LIMIT $3
            "#
        );

        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .bind(query.location.as_deref())
            .bind(query.skills_any_of.as_deref())
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn search_active(&self, search: &JobSearch) -> Result<Vec<JobPosting>, AppError> {
        debug!("Job search: {search:?}");

        let sql = format!(
            r#"{JOB_SELECT}
            WHERE j.status = 'ACTIVE'
              AND (
                    $1::text IS NULL
                 OR CASE WHEN $2::bool
                         THEN lower(j.title) = lower($1) OR lower(j.description) = lower($1)
                         ELSE position(lower($1) IN lower(j.title)) > 0
                           OR position(lower($1) IN lower(j.description)) > 0
                    END
              )
              AND ($3::text IS NULL OR position(lower($3) IN lower(j.location)) > 0)
              AND ($4::text IS NULL OR j.type = $4)
            ORDER BY j.updated_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .bind(search.keyword.as_deref())
            .bind(search.match_mode == MatchMode::Exact)
            .bind(search.location.as_deref())
            .bind(search.job_type.as_deref())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        let sql = format!("{JOB_SELECT} WHERE j.id = $1");
        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(JobPosting::from))
    }

    async fn active_job_facets(&self) -> Result<Vec<JobFacetRow>, AppError> {
        Ok(sqlx::query_as::<_, JobFacetRow>(
            "SELECT location, skills FROM jobs WHERE status = 'ACTIVE' ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn job_skill_lists(&self) -> Result<Vec<Vec<String>>, AppError> {
        Ok(sqlx::query_scalar::<_, Vec<String>>("SELECT skills FROM jobs")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn list_companies(&self, name: Option<&str>) -> Result<Vec<Company>, AppError> {
        debug!("Company directory: name={name:?}");
        Ok(sqlx::query_as::<_, Company>(
            r#"
            SELECT id, name, logo_url, location, created_at
            FROM companies
            WHERE $1::text IS NULL OR position(lower($1) IN lower(name)) > 0
            ORDER BY created_at DESC
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_company(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        Ok(sqlx::query_as::<_, Company>(
            "SELECT id, name, logo_url, location, created_at FROM companies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}

#[async_trait]
impl ProfileReader for PgStore {
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        let row = sqlx::query_as::<_, CandidateProfileRow>(
            r#"
            SELECT cp.user_id, cp.skills, u.location
            FROM candidate_profiles cp
            JOIN users u ON u.id = cp.user_id
            WHERE cp.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CandidateProfile::from))
    }

    async fn declared_skill_lists(&self) -> Result<Vec<Vec<String>>, AppError> {
        let values = sqlx::query_scalar::<_, Option<Value>>("SELECT skills FROM candidate_profiles")
            .fetch_all(&self.pool)
            .await?;
        Ok(values
            .iter()
            .filter_map(|v| parse_skills(v.as_ref()))
            .collect())
    }
}

// These run against a real Postgres: set DATABASE_URL and pass `--ignored`.
// Each test gets a fresh database with the migrations applied.
#[cfg(test)]
mod tests {
    use super::*;

    async fn insert_company(pool: &PgPool, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO companies (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .unwrap();
        id
    }

    async fn insert_job(
        pool: &PgPool,
        company_id: Uuid,
        title: &str,
        location: &str,
        skills: &[&str],
        status: &str,
        age_hours: i32,
    ) {
        let skills: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
        sqlx::query(
            r#"
            INSERT INTO jobs (id, company_id, title, description, location, type, skills,
                              status, updated_at)
            VALUES ($1, $2, $3, $3, $4, 'FULL_TIME', $5, $6,
                    now() - make_interval(hours => $7))
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(title)
        .bind(location)
        .bind(&skills)
        .bind(status)
        .bind(age_hours)
        .execute(pool)
        .await
        .unwrap();
    }

    fn titles(jobs: &[JobPosting]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    async fn seeded(pool: PgPool) -> PgStore {
        let company = insert_company(&pool, "Blue Mountain Digital").await;
        insert_job(&pool, company, "Remote Dev", "Remote", &["Rust"], "ACTIVE", 1).await;
        insert_job(&pool, company, "Office Clerk", "Kingston", &["Filing"], "ACTIVE", 2).await;
        insert_job(&pool, company, "Chef", "Negril", &["Cooking"], "ACTIVE", 3).await;
        insert_job(&pool, company, "Old Dev", "Kingston", &["Rust"], "CLOSED", 0).await;
        PgStore::new(pool)
    }

    #[sqlx::test]
    #[ignore]
    async fn test_recommendation_filter_is_location_or_skills(pool: PgPool) {
        let store = seeded(pool).await;
        let query = RecommendationQuery {
            location: Some("kingston".to_string()),
            skills_any_of: Some(vec!["Rust".to_string()]),
            limit: 5,
        };
        let jobs = store.recommendation_candidates(&query).await.unwrap();
        assert_eq!(titles(&jobs), vec!["Remote Dev", "Office Clerk"]);
        assert_eq!(jobs[0].company.name, "Blue Mountain Digital");
    }

    #[sqlx::test]
    #[ignore]
    async fn test_recommendation_filter_single_criterion(pool: PgPool) {
        let store = seeded(pool).await;
        let by_location = RecommendationQuery {
            location: Some("NEGRIL".to_string()),
            skills_any_of: None,
            limit: 5,
        };
        let jobs = store.recommendation_candidates(&by_location).await.unwrap();
        assert_eq!(titles(&jobs), vec!["Chef"]);

        let by_skills = RecommendationQuery {
            location: None,
            skills_any_of: Some(vec!["Filing".to_string()]),
            limit: 5,
        };
        let jobs = store.recommendation_candidates(&by_skills).await.unwrap();
        assert_eq!(titles(&jobs), vec!["Office Clerk"]);
    }

    #[sqlx::test]
    #[ignore]
    async fn test_recommendation_without_criteria_applies_limit(pool: PgPool) {
        let store = seeded(pool).await;
        let query = RecommendationQuery {
            location: None,
            skills_any_of: None,
            limit: 2,
        };
        let jobs = store.recommendation_candidates(&query).await.unwrap();
        assert_eq!(titles(&jobs), vec!["Remote Dev", "Office Clerk"]);
    }

    #[sqlx::test]
    #[ignore]
    async fn test_company_directory_filters_by_name(pool: PgPool) {
        insert_company(&pool, "Island Grill").await;
        insert_company(&pool, "Digicel Jamaica").await;
        let store = PgStore::new(pool);

        let companies = store.list_companies(Some("GRILL")).await.unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Island Grill");
        assert_eq!(store.list_companies(None).await.unwrap().len(), 2);
        assert!(store.get_company(Uuid::new_v4()).await.unwrap().is_none());
    }
}
