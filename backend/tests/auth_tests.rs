//! Authentication and session tests
//!
//! Pin the sign-in contract: case-insensitive directory lookup, the fixed
//! failure message naming the demo accounts, and token round-trips that
//! restore the role-gated session.

use std::sync::Arc;

use shared::models::{Session, UserRole};
use stockmaster_backend::catalog::Catalog;
use stockmaster_backend::error::{AppError, AUTH_FAILED_MESSAGE};
use stockmaster_backend::services::AuthService;

fn service() -> AuthService {
    AuthService::new(Arc::new(Catalog::seed()), "test-secret")
}

#[cfg(test)]
mod login_tests {
    use super::*;

    /// Email matching is case-insensitive
    #[test]
    fn test_login_is_case_insensitive() {
        let (_, user) = service().login("ADMIN@System.COM").unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, UserRole::Admin);
    }

    /// Unknown email fails with the fixed demo-accounts message
    #[test]
    fn test_unknown_email_is_rejected() {
        let err = service().login("nobody@system.com").unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));

        // The user-facing message names both demo accounts
        assert!(AUTH_FAILED_MESSAGE.contains("admin@system.com"));
        assert!(AUTH_FAILED_MESSAGE.contains("john@system.com"));
    }

    /// A failed sign-in changes no directory state: the same lookup
    /// succeeds immediately afterwards
    #[test]
    fn test_failed_login_leaves_state_unchanged() {
        let service = service();
        assert!(service.login("typo@system.com").is_err());
        assert!(service.login("john@system.com").is_ok());
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    /// The token restores the full refiller identity, outlet included
    #[test]
    fn test_token_round_trip_restores_refiller_session() {
        let service = service();
        let (token, _) = service.login("john@system.com").unwrap();

        let session = service.authorize(&token).unwrap();
        match session {
            Session::Refiller { user, outlet_id } => {
                assert_eq!(user.id, "u-2");
                assert_eq!(user.name, "John Refiller");
                assert_eq!(outlet_id, "ot-1");
            }
            Session::Admin { .. } => panic!("expected refiller session"),
        }
    }

    /// Admin sign-ins resolve to the admin variant with no outlet binding
    #[test]
    fn test_admin_resolves_to_admin_variant() {
        let service = service();
        let (token, _) = service.login("admin@system.com").unwrap();

        let session = service.authorize(&token).unwrap();
        assert!(matches!(&session, Session::Admin { .. }));
        assert_eq!(session.user().outlet_id, None);
    }

    /// Tokens signed with another secret are rejected
    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuing = AuthService::new(Arc::new(Catalog::seed()), "secret-a");
        let verifying = AuthService::new(Arc::new(Catalog::seed()), "secret-b");

        let (token, _) = issuing.login("john@system.com").unwrap();
        let err = verifying.authorize(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    /// Garbage tokens are rejected, not a panic
    #[test]
    fn test_garbage_token_is_rejected() {
        let err = service().authorize("not-a-token").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
