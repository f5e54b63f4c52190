/// Caller identity types
use crate::error::{CoreError, Result};
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Account holder who buys courses for students
    Parent,
    /// Learner account
    Student,
}

impl Role {
    /// Wire representation used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Parent => "PARENT",
            Role::Student => "STUDENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PARENT" => Ok(Role::Parent),
            "STUDENT" => Ok(Role::Student),
            other => Err(CoreError::invalid_input(format!("unknown role: {}", other))),
        }
    }
}

/// Identity of the signed-in user.
///
/// Supplied by the caller on every request; nothing in the client stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    /// Backend user id, sent as `X-User-Id`
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Opaque session token, sent as a bearer credential
    pub token: String,

    /// Role reported at login, if any
    #[serde(default)]
    pub role: Option<Role>,
}

impl AuthIdentity {
    /// Create an identity without a role
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            token: token.into(),
            role: None,
        }
    }

    /// Bearer token to attach, `None` when the token is empty
    pub fn bearer_token(&self) -> Option<&str> {
        Some(self.token.as_str()).filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("parent".parse::<Role>().unwrap(), Role::Parent);
        assert_eq!(" Student ".parse::<Role>().unwrap(), Role::Student);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn unknown_role_is_invalid_input() {
        assert_eq!(
            "admin".parse::<Role>(),
            Err(CoreError::invalid_input("unknown role: ADMIN"))
        );
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Parent).unwrap(), "\"PARENT\"");
    }

    #[test]
    fn empty_token_is_not_a_bearer_credential() {
        let identity = AuthIdentity::new(UserId::new(1), "Ada", "ada@example.com", "");
        assert_eq!(identity.bearer_token(), None);

        let identity = AuthIdentity::new(UserId::new(1), "Ada", "ada@example.com", "abc");
        assert_eq!(identity.bearer_token(), Some("abc"));
    }
}
