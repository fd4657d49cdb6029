//! Handlers for the `/characters` resource.

use axum::extract::State;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use roster_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Character",
        id,
    })
}

/// GET /characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_with_company(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_with_company(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// POST /characters
///
/// `company_id` is stored as sent; it is not checked against `companies`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCharacter>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(id = character.id, "Character created");
    Ok(Json(character))
}

/// PUT /characters/{id}
///
/// The existence check runs before the body is bound, so an unknown id is a
/// 404 even when the body is malformed.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Result<AppJson<UpdateCharacter>, AppError>,
) -> AppResult<Json<Character>> {
    CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let AppJson(input) = body?;

    // The row can vanish between the lookup and the write.
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Character updated");
    Ok(Json(character))
}

/// DELETE /characters/{id}
///
/// Always succeeds, whether or not a row matched. An id that is not an
/// integer matches no row.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<&'static str> {
    let deleted = match raw_id.parse::<DbId>() {
        Ok(id) => CharacterRepo::hard_delete(&state.pool, id).await?,
        Err(_) => false,
    };
    tracing::info!(id = %raw_id, deleted, "Character delete requested");
    Ok("deleted")
}
