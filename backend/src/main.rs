use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend::auth::{DomainPolicy, FirebaseVerifier, TokenAuthenticator};
use backend::config::AppConfig;
use backend::routes::{build_cors_layer, build_router};
use backend::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    tracing::info!("Starting ZotHousing backend server");

    // Verifier key material is fetched once here and immutable afterwards
    let verifier = FirebaseVerifier::from_google_certs(
        &config.firebase_project_id,
        Duration::from_secs(config.verifier_timeout_secs),
    )
    .await?;
    tracing::info!(
        "Identity verifier initialized for project {}",
        config.firebase_project_id
    );

    let state = AppState {
        authenticator: Arc::new(TokenAuthenticator::new(
            Arc::new(verifier),
            DomainPolicy::new(config.allowed_email_domain.as_str()),
        )),
    };

    let app = build_router(state).layer(build_cors_layer(&config));

    // Serve the prebuilt frontend bundle if present, falling back to
    // index.html for unmatched paths so client-side routing works
    let app = if std::path::Path::new(&config.frontend_dir).exists() {
        tracing::info!("Serving frontend from {}", config.frontend_dir);
        let index_path = format!("{}/index.html", config.frontend_dir);
        let serve_dir =
            ServeDir::new(&config.frontend_dir).not_found_service(ServeFile::new(&index_path));
        app.fallback_service(serve_dir)
    } else {
        tracing::info!(
            "Frontend directory not found at {}, serving API only",
            config.frontend_dir
        );
        app
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
