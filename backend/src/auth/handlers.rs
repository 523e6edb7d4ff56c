//! HTTP handlers for the authentication routes.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

use super::extract::bearer_from_headers;
use super::types::{AuthOutcome, UserResponse};

/// Request body for the Google Sign-In route.
#[derive(Debug, Deserialize)]
pub struct GoogleSignInRequest {
    pub id_token: String,
}

/// Service banner with an endpoint map.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "ZotHousing API",
        "status": "running",
        "endpoints": {
            "POST /api/auth/google": "Sign in with a Google ID token",
            "GET /api/auth/me": "Current user from a bearer token",
            "GET /api/auth/protected": "Example protected resource",
            "POST /api/auth/signout": "Sign out (stateless)",
        },
    }))
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Verify a Google Sign-In ID token and return the user's profile.
pub async fn auth_google(
    State(state): State<AppState>,
    Json(payload): Json<GoogleSignInRequest>,
) -> ApiResult<Json<UserResponse>> {
    authenticate(&state, &payload.id_token).await.map(Json)
}

/// Current user info from the `Authorization` header.
pub async fn auth_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<UserResponse>> {
    let token = bearer_from_headers(&headers)?;
    authenticate(&state, token).await.map(Json)
}

/// Example route demonstrating the authorization contract.
pub async fn auth_protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    let token = bearer_from_headers(&headers)?;
    let user = authenticate(&state, token).await?;

    Ok(Json(json!({
        "message": "This is a protected route",
        "info": "Only requests carrying a valid bearer token can see it",
        "user": user,
    })))
}

/// Sign-out is purely informational: tokens are stateless, so there is no
/// server-side session to tear down.
pub async fn auth_signout() -> impl IntoResponse {
    Json(json!({
        "message": "Signed out successfully",
        "note": "Tokens are stateless; the client should discard its token",
    }))
}

async fn authenticate(state: &AppState, id_token: &str) -> Result<UserResponse, ApiError> {
    match state.authenticator.authenticate(id_token).await {
        AuthOutcome::Authenticated(claims) => {
            tracing::info!("Authenticated {}", claims.email);
            Ok(UserResponse::from(claims))
        }
        AuthOutcome::Rejected(reason) => {
            tracing::warn!("Rejected sign-in attempt: {}", reason.detail());
            Err(ApiError::from(reason))
        }
    }
}
