use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parse a persisted or transmitted role name.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity.
///
/// A session without a token is the same as being logged out; its role
/// carries no authority.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    pub token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Observable authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The persisted session has not been checked yet.
    Restoring,
    LoggedOut,
    LoggedIn(Session),
}

impl AuthState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthState::Restoring)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::LoggedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some_and(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.session().is_some_and(Session::is_admin)
    }
}
