use anyhow::{Context, Result};
use std::env;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set. These cover the
/// local Vite dev server and a locally served production build.
const DEFAULT_DEV_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
];

/// Application configuration, loaded once at startup and passed by
/// reference into the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Firebase project whose ID tokens we accept.
    pub firebase_project_id: String,
    /// Email suffix required of authenticated users, e.g. `@uci.edu`.
    pub allowed_email_domain: String,
    pub cors_allowed_origins: Vec<String>,
    /// Directory holding the prebuilt frontend bundle.
    pub frontend_dir: String,
    /// Timeout for the startup signing-key fetch, in seconds.
    pub verifier_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            firebase_project_id: env::var("FIREBASE_PROJECT_ID")
                .context("FIREBASE_PROJECT_ID must be set")?,
            allowed_email_domain: env::var("ALLOWED_EMAIL_DOMAIN")
                .unwrap_or_else(|_| "@uci.edu".to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    DEFAULT_DEV_ORIGINS.iter().map(|s| s.to_string()).collect()
                }),
            frontend_dir: env::var("FRONTEND_DIR").unwrap_or_else(|_| "public".to_string()),
            verifier_timeout_secs: env::var("VERIFIER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("VERIFIER_TIMEOUT_SECS must be a valid number")?,
        })
    }
}
