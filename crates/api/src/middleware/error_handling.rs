//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classgrid_core::errors::ScheduleError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps [`ScheduleError`] and implements `IntoResponse`, turning
/// it into a status code plus a `{ "error": "..." }` body.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use classgrid_api::middleware::error_handling::AppError;
/// use classgrid_core::errors::ScheduleError;
///
/// async fn handler(raw: String) -> Result<Json<u32>, AppError> {
///     let value = raw
///         .parse::<u32>()
///         .map_err(|e| AppError(ScheduleError::Validation(e.to_string())))?;
///     Ok(Json(value))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `ScheduleResult` inside handlers.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Wraps storage failures reported as `eyre::Report` in
/// [`ScheduleError::Database`].
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}
