//! Redirect helpers shared by the handlers and [`AppError`](crate::error::AppError).
//!
//! Outcomes are reported with `302 Found` so browsers re-issue a `GET`
//! against the outcome page after a form post.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use enrollment_core::types::DbId;

/// Shown on the error page when no message is supplied.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Shown when the repository rejects an enrollment.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save enrollment";

/// A `302 Found` response pointing at `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// Location of the confirmation page for a stored enrollment.
pub fn success_location(student_id: DbId) -> String {
    format!("/success/{student_id}")
}

/// Location of the error page carrying `message` as a query parameter.
pub fn error_location(message: &str) -> String {
    match serde_urlencoded::to_string([("message", message)]) {
        Ok(query) => format!("/error?{query}"),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode error message");
            "/error".to_string()
        }
    }
}
