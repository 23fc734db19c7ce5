//! User account types.
//!
//! These types represent the authoritative user list and the password-free
//! projection stored in the session.

use serde::{Deserialize, Serialize};

use polimarket_core::{Role, Username};

/// A user account in the authoritative user list.
///
/// Passwords are stored and compared as plain strings. That is a known
/// security gap of this demo (there is no registration flow and the accounts
/// are shared seed data), not a pattern to copy into anything real.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login username, unique case-insensitively across the list.
    pub username: Username,
    /// Plain-text password (demo only, see type docs).
    pub password: String,
    /// Access role.
    pub role: Role,
    /// Display name.
    pub name: String,
}

impl User {
    /// Project this account into session state, dropping the password.
    #[must_use]
    pub fn to_current(&self) -> CurrentUser {
        CurrentUser {
            username: self.username.clone(),
            role: self.role,
            name: self.name.clone(),
        }
    }
}

/// Session-stored user identity.
///
/// Minimal password-free projection of the logged-in user. This is the only
/// user shape that leaves the store or touches persistence: the password is
/// stripped at the type level, so there is no field to leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Login username.
    pub username: Username,
    /// Access role.
    pub role: Role,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            username: Username::parse("mariocas").unwrap(),
            password: "123".to_owned(),
            role: Role::Admin,
            name: "Mario Casas".to_owned(),
        }
    }

    #[test]
    fn test_to_current_keeps_identity_fields() {
        let current = user().to_current();
        assert_eq!(current.username.as_str(), "mariocas");
        assert_eq!(current.role, Role::Admin);
        assert_eq!(current.name, "Mario Casas");
    }

    #[test]
    fn test_current_user_serializes_without_password() {
        let json = serde_json::to_value(user().to_current()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json.get("role").unwrap(), "admin");
    }
}
