//! Handlers for the enrollment intake flow.
//!
//! `GET /` shows the form, `POST /submit` stores one enrollment and
//! redirects to either `/success/{student_id}` or `/error?message=...`.

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{Html, Response};
use axum::Form;
use enrollment_core::enrollment;
use enrollment_db::repositories::EnrollmentRepo;
use percent_encoding::percent_decode_str;

use crate::error::{AppError, AppResult};
use crate::response::{found, success_location, DEFAULT_ERROR_MESSAGE};
use crate::state::AppState;
use crate::views;

/// Path prefix of the confirmation page.
const SUCCESS_PREFIX: &str = "/success/";

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Render the enrollment form.
pub async fn show_form() -> Html<String> {
    Html(views::enrollment_form())
}

// ---------------------------------------------------------------------------
// POST /submit
// ---------------------------------------------------------------------------

/// Store a submitted enrollment and redirect to its outcome page.
///
/// The body is decoded as ordered key/value pairs; a repeated key keeps its
/// last value. A fresh connection is opened for the insert and closed before
/// responding.
pub async fn submit_enrollment(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> AppResult<Response> {
    let Form(pairs) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let fields = enrollment::collapse_pairs(pairs);

    let mut conn = state.db.connect().await?;
    let result = EnrollmentRepo::insert(&mut conn, &fields).await;
    enrollment_db::release(conn).await;

    let student_id = result.map_err(AppError::SaveFailed)?;

    tracing::info!(student_id, "Enrollment saved");

    Ok(found(&success_location(student_id)))
}

// ---------------------------------------------------------------------------
// GET /success/{student_id}
// ---------------------------------------------------------------------------

/// Render the confirmation page. The identifier is not looked up.
///
/// The path segment is percent-decoded lossily so any identifier renders,
/// including one that is not valid UTF-8.
pub async fn show_success(uri: Uri) -> Html<String> {
    let raw = uri.path().strip_prefix(SUCCESS_PREFIX).unwrap_or_default();
    let student_id = percent_decode_str(raw).decode_utf8_lossy();
    Html(views::success_page(&student_id))
}

// ---------------------------------------------------------------------------
// GET /error
// ---------------------------------------------------------------------------

/// Render the error page with the `message` query parameter.
///
/// When `message` is repeated the first value is shown.
pub async fn show_error(Query(params): Query<Vec<(String, String)>>) -> Html<String> {
    let message = params
        .iter()
        .find(|(key, _)| key == "message")
        .map_or(DEFAULT_ERROR_MESSAGE, |(_, value)| value.as_str());
    Html(views::error_page(message))
}
