use axum::response::{IntoResponse, Response};

use crate::response::{error_location, found, SAVE_FAILED_MESSAGE};

/// Application-level error type for HTTP handlers.
///
/// Every variant ends in a redirect to the error page. Storage rejections of
/// an enrollment are reported with a fixed message; the engine text is only
/// logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The repository rejected the enrollment insert.
    #[error("Failed to save enrollment: {0}")]
    SaveFailed(#[source] sqlx::Error),

    /// A database error outside the insert itself (e.g. opening the file).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message shown to the user on the error page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::SaveFailed(_) => SAVE_FAILED_MESSAGE.to_string(),
            AppError::Database(err) => err.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::SaveFailed(err) => {
                tracing::error!(error = %err, "Error saving enrollment");
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected submission");
            }
        }

        found(&error_location(&self.user_message()))
    }
}
