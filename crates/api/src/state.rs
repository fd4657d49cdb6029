/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is a handle onto shared connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roster_db::DbPool,
}
