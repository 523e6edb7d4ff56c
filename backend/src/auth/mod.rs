//! Authentication gate for Google Sign-In identity tokens.
//!
//! This module provides:
//! - An [`IdentityVerifier`] trait over the external identity platform
//! - [`TokenAuthenticator`], which adds the email domain-restriction policy
//! - Bearer token extraction from the `Authorization` header
//! - HTTP handlers for the `/api/auth/*` routes

mod authenticator;
mod extract;
pub mod handlers;
pub mod types;
mod verifier;

pub use authenticator::{DomainPolicy, TokenAuthenticator};
pub use extract::{bearer_from_headers, bearer_token, ExtractError};
pub use types::{AuthOutcome, IdentityClaims, RejectReason, UserResponse};
pub use verifier::{FirebaseVerifier, IdentityVerifier, VerifyError};
