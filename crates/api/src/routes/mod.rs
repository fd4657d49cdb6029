pub mod character;
pub mod company;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// ```text
/// /companies                                       list
/// /companies/{id}                                  get
///
/// /characters                                      list, create
/// /characters/{id}                                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", company::router())
        .nest("/characters", character::router())
}
