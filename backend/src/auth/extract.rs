//! Bearer token extraction from the `Authorization` header.
//!
//! Pure parsing, no I/O; tested independently of the verifier.

use axum::http::{header, HeaderMap};
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Failure to extract a candidate token from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing authorization header")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ExtractError {
    /// Client-facing message for the 401 response body.
    pub fn detail(&self) -> &'static str {
        match self {
            ExtractError::MissingHeader => "Missing authorization header",
            ExtractError::MalformedHeader => "Invalid authorization header format",
        }
    }
}

/// Extract the token from a raw `Authorization` header value.
///
/// The scheme prefix is matched case-sensitively with a single space.
pub fn bearer_token(header: Option<&str>) -> Result<&str, ExtractError> {
    let value = match header {
        None | Some("") => return Err(ExtractError::MissingHeader),
        Some(value) => value,
    };

    value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(ExtractError::MalformedHeader)
}

/// Extract the bearer token from request headers.
pub fn bearer_from_headers(headers: &HeaderMap) -> Result<&str, ExtractError> {
    match headers.get(header::AUTHORIZATION) {
        None => Err(ExtractError::MissingHeader),
        Some(value) => {
            let value = value.to_str().map_err(|_| ExtractError::MalformedHeader)?;
            bearer_token(Some(value))
        }
    }
}
