use axum::routing::get;
use axum::Router;

use crate::handlers::company;
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /          -> list
/// GET    /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(company::list))
        .route("/{id}", get(company::get_by_id))
}
