//! Token authentication with the email domain-restriction policy.

use std::sync::Arc;

use super::types::{AuthOutcome, RejectReason};
use super::verifier::{IdentityVerifier, VerifyError};

/// Restricts authenticated users to a fixed email domain suffix.
#[derive(Debug, Clone)]
pub struct DomainPolicy {
    suffix: String,
}

impl DomainPolicy {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Case-sensitive exact suffix match.
    pub fn allows(&self, email: &str) -> bool {
        email.ends_with(&self.suffix)
    }

    /// Human-readable rejection message naming the required domain,
    /// e.g. `Please use your UCI email address (@uci.edu)`.
    pub fn rejection_message(&self) -> String {
        let label = self
            .suffix
            .trim_start_matches('@')
            .split('.')
            .next()
            .unwrap_or(self.suffix.as_str())
            .to_uppercase();
        format!("Please use your {} email address ({})", label, self.suffix)
    }
}

/// Wraps the external identity verifier and applies the domain policy.
///
/// The ordering is deliberate: cryptographic validity first, then the
/// domain restriction, so the rejection reason distinguishes the two.
pub struct TokenAuthenticator {
    verifier: Arc<dyn IdentityVerifier>,
    policy: DomainPolicy,
}

impl TokenAuthenticator {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, policy: DomainPolicy) -> Self {
        Self { verifier, policy }
    }

    /// Authenticate a raw identity token.
    ///
    /// Every failure is a normal, reportable [`AuthOutcome::Rejected`];
    /// nothing here escalates to a server error. Token contents are never
    /// logged or stored.
    pub async fn authenticate(&self, id_token: &str) -> AuthOutcome {
        let claims = match self.verifier.verify(id_token).await {
            Ok(claims) => claims,
            Err(VerifyError::Invalid) => return AuthOutcome::Rejected(RejectReason::InvalidToken),
            Err(VerifyError::Expired) => return AuthOutcome::Rejected(RejectReason::ExpiredToken),
            Err(VerifyError::Other(msg)) => {
                return AuthOutcome::Rejected(RejectReason::VerificationError(msg))
            }
        };

        if !self.policy.allows(&claims.email) {
            return AuthOutcome::Rejected(RejectReason::WrongDomain {
                message: self.policy.rejection_message(),
            });
        }

        AuthOutcome::Authenticated(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::types::IdentityClaims;
    use async_trait::async_trait;

    struct FixedVerifier(Result<IdentityClaims, VerifyError>);

    #[async_trait]
    impl IdentityVerifier for FixedVerifier {
        async fn verify(&self, _id_token: &str) -> Result<IdentityClaims, VerifyError> {
            self.0.clone()
        }
    }

    fn uci_claims() -> IdentityClaims {
        IdentityClaims {
            subject_id: "firebase-uid-1".to_string(),
            email: "panteater@uci.edu".to_string(),
            display_name: Some("Peter Anteater".to_string()),
            picture_url: Some("https://example.com/peter.png".to_string()),
            email_verified: true,
        }
    }

    fn authenticator(result: Result<IdentityClaims, VerifyError>) -> TokenAuthenticator {
        TokenAuthenticator::new(
            Arc::new(FixedVerifier(result)),
            DomainPolicy::new("@uci.edu"),
        )
    }

    #[tokio::test]
    async fn valid_uci_token_passes_claims_through() {
        let outcome = authenticator(Ok(uci_claims())).authenticate("token").await;

        assert_eq!(outcome, AuthOutcome::Authenticated(uci_claims()));
    }

    #[tokio::test]
    async fn missing_optional_claims_are_preserved() {
        let mut claims = uci_claims();
        claims.display_name = None;
        claims.picture_url = None;

        let outcome = authenticator(Ok(claims.clone()))
            .authenticate("token")
            .await;

        assert_eq!(outcome, AuthOutcome::Authenticated(claims));
    }

    #[tokio::test]
    async fn valid_foreign_domain_is_rejected() {
        let mut claims = uci_claims();
        claims.email = "someone@gmail.com".to_string();

        let outcome = authenticator(Ok(claims)).authenticate("token").await;

        assert_eq!(
            outcome,
            AuthOutcome::Rejected(RejectReason::WrongDomain {
                message: "Please use your UCI email address (@uci.edu)".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let outcome = authenticator(Err(VerifyError::Invalid))
            .authenticate("token")
            .await;

        assert_eq!(outcome, AuthOutcome::Rejected(RejectReason::InvalidToken));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let outcome = authenticator(Err(VerifyError::Expired))
            .authenticate("token")
            .await;

        assert_eq!(outcome, AuthOutcome::Rejected(RejectReason::ExpiredToken));
    }

    #[tokio::test]
    async fn verifier_failure_is_a_reportable_outcome() {
        let outcome = authenticator(Err(VerifyError::Other("verifier unavailable".to_string())))
            .authenticate("token")
            .await;

        assert_eq!(
            outcome,
            AuthOutcome::Rejected(RejectReason::VerificationError(
                "verifier unavailable".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn authentication_is_idempotent() {
        let authenticator = authenticator(Ok(uci_claims()));

        let first = authenticator.authenticate("token").await;
        let second = authenticator.authenticate("token").await;

        assert_eq!(first, second);
    }

    #[test]
    fn domain_match_is_case_sensitive() {
        let policy = DomainPolicy::new("@uci.edu");

        assert!(policy.allows("panteater@uci.edu"));
        assert!(!policy.allows("panteater@UCI.EDU"));
        assert!(!policy.allows("panteater@uci.edu.evil.com"));
        assert!(!policy.allows(""));
    }

    #[test]
    fn rejection_message_names_the_domain() {
        assert_eq!(
            DomainPolicy::new("@uci.edu").rejection_message(),
            "Please use your UCI email address (@uci.edu)"
        );
    }
}
