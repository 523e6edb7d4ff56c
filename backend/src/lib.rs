//! ZotHousing backend: Google Sign-In authentication restricted to UCI
//! email addresses, plus static serving of the prebuilt frontend bundle.

use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use crate::auth::TokenAuthenticator;

/// Shared application state injected into every handler.
///
/// The authenticator is the only process-wide state; it is built once at
/// startup from [`config::AppConfig`] and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<TokenAuthenticator>,
}
