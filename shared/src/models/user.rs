//! User and session models

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Roles available in the user directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Refiller,
}

/// A directory user
///
/// `outlet_id` is present exactly when the role is `Refiller`; admins are
/// not bound to a single outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,
}

/// An authenticated session, resolved once at sign-in.
///
/// Each variant exposes only the operations valid for it: reporting for
/// `Admin`, entry capture for `Refiller`.
#[derive(Debug, Clone)]
pub enum Session {
    Admin { user: User },
    Refiller { user: User, outlet_id: String },
}

/// A user identity that cannot be turned into a session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("refiller account `{0}` has no assigned outlet")]
    RefillerWithoutOutlet(String),
}

impl Session {
    /// Resolve the session variant for a directory user
    pub fn resolve(user: User) -> Result<Self, SessionError> {
        match user.role {
            UserRole::Admin => Ok(Session::Admin { user }),
            UserRole::Refiller => match user.outlet_id.clone() {
                Some(outlet_id) => Ok(Session::Refiller { user, outlet_id }),
                None => Err(SessionError::RefillerWithoutOutlet(user.id)),
            },
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Session::Admin { user } => user,
            Session::Refiller { user, .. } => user,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Session::Admin { .. } => UserRole::Admin,
            Session::Refiller { .. } => UserRole::Refiller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, outlet_id: Option<&str>) -> User {
        User {
            id: "u-1".to_string(),
            name: "Test User".to_string(),
            email: "test@system.com".to_string(),
            role,
            outlet_id: outlet_id.map(str::to_string),
        }
    }

    #[test]
    fn test_admin_session_has_no_outlet() {
        let session = Session::resolve(user(UserRole::Admin, None)).unwrap();
        assert!(matches!(&session, Session::Admin { .. }));
        assert_eq!(session.role(), UserRole::Admin);
    }

    #[test]
    fn test_refiller_session_carries_outlet() {
        let session = Session::resolve(user(UserRole::Refiller, Some("ot-1"))).unwrap();
        match session {
            Session::Refiller { ref outlet_id, .. } => assert_eq!(outlet_id, "ot-1"),
            _ => panic!("expected refiller session"),
        }
    }

    #[test]
    fn test_refiller_without_outlet_is_rejected() {
        let err = Session::resolve(user(UserRole::Refiller, None)).unwrap_err();
        assert_eq!(err, SessionError::RefillerWithoutOutlet("u-1".to_string()));
    }
}
