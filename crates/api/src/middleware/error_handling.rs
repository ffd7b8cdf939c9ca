//! # Error Handling Middleware
//!
//! Maps appointment errors to HTTP status codes and JSON error bodies of the
//! form `{"error": "<message>"}`, so every handler fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doccal_core::errors::AppointmentError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use doccal_api::middleware::error_handling::AppError;
/// use doccal_core::errors::AppointmentError;
///
/// async fn handler(found: bool) -> Result<Json<u64>, AppError> {
///     if !found {
///         return Err(AppointmentError::appointment_not_found().into());
///     }
///     Ok(Json(1))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AppointmentError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppointmentError::NotFound(_) => StatusCode::NOT_FOUND,
            AppointmentError::Validation(_) => StatusCode::BAD_REQUEST,
            AppointmentError::Conflict(_) => StatusCode::CONFLICT,
            AppointmentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `AppointmentResult` inside handlers.
impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AppointmentError::Internal(err))
    }
}

/// Maps an AppointmentError straight to an HTTP response
pub fn map_error(err: AppointmentError) -> Response {
    AppError(err).into_response()
}
