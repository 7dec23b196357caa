/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted. Server configuration is
/// consumed while building the router and is not carried here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gearshelf_db::DbPool,
}
