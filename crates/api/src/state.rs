use enrollment_db::Database;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds no connections; handlers open their own.
#[derive(Clone)]
pub struct AppState {
    /// Enrollment database handle.
    pub db: Database,
}
