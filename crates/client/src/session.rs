//! The authenticated session value.
//!
//! A [`Session`] is the bearer token issued by the auth endpoints plus
//! the account it belongs to. It is passed around explicitly: nothing
//! here persists it, and there is deliberately no process-global
//! current-user state. The embedding application decides where (if
//! anywhere) a session is stored between runs.

use givehub_core::model::{SessionPayload, User};

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// The signed-in account.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Whether the signed-in account holds an admin role.
    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }

    /// The raw bearer token, for callers that persist sessions.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The `Authorization` header value for this session.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<SessionPayload> for Session {
    fn from(payload: SessionPayload) -> Self {
        Self::new(payload.token, payload.user)
    }
}
