//! Auth data contracts.

use serde::Serialize;

/// Claims extracted from a successfully verified identity token.
///
/// Produced only by the verifier; immutable once produced; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub subject_id: String,
    /// Always present; empty when the token carried no email claim, in
    /// which case the domain policy rejects it.
    pub email: String,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
    pub email_verified: bool,
}

/// Result of an authentication attempt.
///
/// Every route collapses to branching on this value; rejection is a normal
/// per-request outcome, never a server error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(IdentityClaims),
    Rejected(RejectReason),
}

/// Why an authentication attempt was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Signature or format invalid.
    InvalidToken,
    /// The token's validity window has passed.
    ExpiredToken,
    /// Cryptographically valid, but the email is outside the allowed domain.
    WrongDomain { message: String },
    /// Anything else the verifier could not handle.
    VerificationError(String),
}

impl RejectReason {
    /// Client-facing message for the 401 response body.
    pub fn detail(&self) -> String {
        match self {
            RejectReason::InvalidToken => "Invalid token".to_string(),
            RejectReason::ExpiredToken => "Token expired".to_string(),
            RejectReason::WrongDomain { message } => message.clone(),
            RejectReason::VerificationError(msg) => format!("Authentication failed: {}", msg),
        }
    }
}

/// User shape returned by the auth routes.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email_verified: bool,
}

impl From<IdentityClaims> for UserResponse {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            uid: claims.subject_id,
            email: claims.email,
            name: claims.display_name,
            picture: claims.picture_url,
            email_verified: claims.email_verified,
        }
    }
}
