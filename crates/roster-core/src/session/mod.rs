//! Session gate.
//!
//! Mutating commands are only available to an authenticated user. The gate
//! is a trait so a real identity backend can replace the fixed credential
//! list without touching callers.

mod gate;
mod storage;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use gate::{SessionGate, StaticCredentialGate};
pub use storage::{
    FileSessionStorage, MemorySessionStorage, SESSION_KEY, SessionError, SessionStorage,
};

/// The authenticated user. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}

/// An entry in the credential list checked by [`StaticCredentialGate`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub user: SessionUser,
    password: String,
}

impl Credential {
    pub fn new(user: SessionUser, password: impl Into<String>) -> Self {
        Self {
            user,
            password: password.into(),
        }
    }

    pub(crate) fn matches(&self, username: &str, password: &str) -> bool {
        self.user.username == username && self.password == password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The built-in accounts.
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential::new(
            SessionUser {
                id: "1".to_string(),
                username: "admin".to_string(),
                is_admin: true,
            },
            "admin123",
        ),
        Credential::new(
            SessionUser {
                id: "2".to_string(),
                username: "user".to_string(),
                is_admin: false,
            },
            "user123",
        ),
    ]
}
