//! Read-only company directory.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::Company;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompanyListQuery {
    /// Case-insensitive name substring. Empty means no filter.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse<T> {
    pub success: bool,
    pub data: T,
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyListQuery>,
) -> Result<Json<CompanyResponse<Vec<Company>>>, AppError> {
    let name = params.q.as_deref().filter(|q| !q.is_empty());
    let companies = state.catalog.list_companies(name).await?;
    Ok(Json(CompanyResponse {
        success: true,
        data: companies,
    }))
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyResponse<Company>>, AppError> {
    let company = state
        .catalog
        .get_company(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(CompanyResponse {
        success: true,
        data: company,
    }))
}
