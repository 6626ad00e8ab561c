//! # ClassDesk API
//!
//! HTTP server for the training-center back office: previewing generated class
//! sessions, driving schedule drafts and storing class schedules.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint paths, grouped by area
//! - **Handlers**: request processing
//! - **Middleware**: admin role gate and error mapping
//! - **Config**: environment configuration
//!
//! Storage goes through [`ClassScheduleStore`], so the router can be served
//! against PostgreSQL or a mock.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Role gate and error mapping
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use classdesk_db::store::ClassScheduleStore;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where class schedules are kept
    pub store: Arc<dyn ClassScheduleStore>,
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Session preview and draft endpoints
        .merge(routes::session::routes())
        // Class schedule endpoints
        .merge(routes::schedule::routes())
        .with_state(state)
}

/// Starts the API server
///
/// Sets up logging, layers CORS, tracing and the request timeout on top of
/// [`app`], and serves until the process stops.
pub async fn start_server(
    config: config::ApiConfig,
    store: Arc<dyn ClassScheduleStore>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { store });
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::HeaderName::from_static(middleware::auth::ROLE_HEADER),
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}
