//! # Admin Role Gate
//!
//! Users sign in through an external provider which forwards the signed-in
//! user's role in the [`ROLE_HEADER`] header. Every `/api` route is reserved for
//! administrators; this middleware only checks that header.

use axum::{extract::Request, middleware::Next, response::Response};
use classdesk_core::errors::ScheduleError;
use tracing::debug;

use super::error_handling::AppError;

pub const ROLE_HEADER: &str = "x-user-role";
pub const ADMIN_ROLE: &str = "admin";

/// Rejects requests without a role (401) or with a role other than admin (403).
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let role = request
        .headers()
        .get(ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|role| role.trim().to_owned())
        .filter(|role| !role.is_empty());

    match role {
        Some(role) if role.eq_ignore_ascii_case(ADMIN_ROLE) => Ok(next.run(request).await),
        Some(role) => {
            debug!("Rejected {} for role {}", request.uri().path(), role);
            Err(AppError(ScheduleError::Authorization(
                "Admin role required".to_string(),
            )))
        }
        None => Err(AppError(ScheduleError::Authentication(
            "No signed-in user".to_string(),
        ))),
    }
}
