use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::handlers;
use crate::config::AppConfig;
use crate::AppState;

/// Assemble the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        // Auth routes
        .route("/api/auth/google", post(handlers::auth_google))
        .route("/api/auth/me", get(handlers::auth_me))
        .route("/api/auth/protected", get(handlers::auth_protected))
        .route("/api/auth/signout", post(handlers::auth_signout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from the configured origin allowlist.
///
/// Credentials are allowed, so the origin list is always explicit; a
/// wildcard origin cannot be combined with credentials.
pub fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    tracing::info!("CORS configured for origins: {:?}", config.cors_allowed_origins);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
