//! Route definitions for the enrollment intake pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Enrollment routes.
///
/// ```text
/// GET    /                       -> show_form
/// POST   /submit                 -> submit_enrollment
/// GET    /success/{student_id}   -> show_success
/// GET    /error                  -> show_error
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::show_form))
        .route("/submit", post(enrollment::submit_enrollment))
        .route("/success/{student_id}", get(enrollment::show_success))
        .route("/error", get(enrollment::show_error))
}
