//! # Error Handling
//!
//! Maps [`ScheduleError`] onto HTTP responses with a `{"error": "..."}` body.
//!
//! | error            | status |
//! |------------------|--------|
//! | `NotFound`       | 404    |
//! | `Validation`     | 400    |
//! | `Authentication` | 401    |
//! | `Authorization`  | 403    |
//! | `Database`       | 500    |
//! | `Internal`       | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classdesk_core::errors::ScheduleError;
use serde_json::json;
use tracing::error;

/// Handler error; wraps a [`ScheduleError`] so `?` works in handlers.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use classdesk_api::middleware::error_handling::AppError;
/// use classdesk_core::errors::ScheduleError;
///
/// async fn handler(name: String) -> Result<Json<String>, AppError> {
///     if name.trim().is_empty() {
///         return Err(ScheduleError::Validation("Class name is required".to_string()).into());
///     }
///     Ok(Json(name))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ScheduleError::Authorization(_) => StatusCode::FORBIDDEN,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Storage failures surface as `Database` errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}

pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}
