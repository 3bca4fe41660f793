//! Session state

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// A signed-in session
///
/// Token and role only ever exist together; the absence of a session is
/// represented as `Option<Session>::None` rather than a half-filled value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            token: token.into(),
            role: role.into(),
        }
    }
}

// Keeps bearer tokens out of log output.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
