use poshujan_shared::session::{Credentials, LoginOutcome};

use crate::api;

/// Decides whether a credential pair may log in.
#[allow(async_fn_in_trait)]
pub trait Authenticator {
    async fn authenticate(&self, credentials: &Credentials) -> LoginOutcome;
}

/// Checks credentials against the server's `login` mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteAuthenticator;

impl Authenticator for RemoteAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> LoginOutcome {
        match api::login(credentials).await {
            Ok(outcome) => outcome,
            Err(e) => LoginOutcome::Unavailable(e),
        }
    }
}

/// Blank fields are rejected before the authenticator is asked.
pub async fn attempt_login<A: Authenticator>(
    authenticator: &A,
    username: &str,
    password: &str,
) -> LoginOutcome {
    match Credentials::parse(username, password) {
        Some(credentials) => authenticator.authenticate(&credentials).await,
        None => LoginOutcome::MissingFields,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{LocalAuthenticator, OfflineAuthenticator};
    use super::*;

    #[tokio::test]
    async fn test_attempt_login_accepted() {
        let auth = LocalAuthenticator::new();
        let outcome = attempt_login(&auth, "gaw97094", "97094").await;
        assert_eq!(outcome, LoginOutcome::Accepted);
        assert_eq!(auth.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_attempt_login_rejected() {
        let auth = LocalAuthenticator::new();
        let outcome = attempt_login(&auth, "gaw97094", "00000").await;
        assert_eq!(outcome, LoginOutcome::Rejected);
    }

    #[tokio::test]
    async fn test_blank_fields_skip_authenticator() {
        let auth = LocalAuthenticator::new();
        let outcome = attempt_login(&auth, "  ", "97094").await;
        assert_eq!(outcome, LoginOutcome::MissingFields);
        assert_eq!(auth.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_offline_authenticator() {
        let outcome = attempt_login(&OfflineAuthenticator, "gaw97094", "97094").await;
        assert!(matches!(outcome, LoginOutcome::Unavailable(_)));
    }
}
