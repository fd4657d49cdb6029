//! Handlers for the `/companies` resource.
//!
//! Companies are read-only over HTTP; they only come from fixture seeding.

use axum::extract::State;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::company::Company;
use roster_db::repositories::CompanyRepo;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /companies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Company>>> {
    let companies = CompanyRepo::list_with_characters(&state.pool).await?;
    Ok(Json(companies))
}

/// GET /companies/{id}
///
/// An unknown id is not an error: the response is a zero-valued company.
/// An id that is not an integer matches nothing and gets the same answer.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<Company>> {
    let found = match raw_id.parse::<DbId>() {
        Ok(id) => CompanyRepo::find_with_characters(&state.pool, id).await?,
        Err(_) => None,
    };
    let company = found.unwrap_or_else(|| {
        tracing::debug!(id = %raw_id, "Company not found, returning empty record");
        Company::default()
    });
    Ok(Json(company))
}
