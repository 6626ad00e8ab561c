use axum::{middleware, routing::post, Router};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/sessions/generate",
            post(handlers::session::generate_sessions),
        )
        .route("/api/sessions/draft", post(handlers::session::apply_draft_action))
        .route_layer(middleware::from_fn(auth::require_admin))
}
