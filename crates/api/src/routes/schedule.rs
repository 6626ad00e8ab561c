use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedules",
            get(handlers::schedule::list_schedules).post(handlers::schedule::create_schedule),
        )
        .route(
            "/api/schedules/:id",
            get(handlers::schedule::get_schedule)
                .put(handlers::schedule::update_schedule)
                .delete(handlers::schedule::delete_schedule),
        )
        .route(
            "/api/schedules/:id/draft",
            get(handlers::schedule::get_schedule_draft),
        )
        .route_layer(middleware::from_fn(auth::require_admin))
}
