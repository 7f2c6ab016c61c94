use tracing::{info, warn};

use super::{Credential, SessionStorage, SessionUser, default_credentials};

/// Login state shared by every mutating operation.
pub trait SessionGate {
    /// Check the credentials and, when they match, start a session.
    ///
    /// A failed attempt leaves any existing session untouched and does not
    /// say which of the two values was wrong.
    fn login(&mut self, username: &str, password: &str) -> bool;

    fn logout(&mut self);

    fn current_user(&self) -> Option<&SessionUser>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Gate backed by a fixed credential list, persisting the session through
/// a [`SessionStorage`].
#[derive(Debug)]
pub struct StaticCredentialGate<S> {
    credentials: Vec<Credential>,
    storage: S,
    current: Option<SessionUser>,
}

impl<S: SessionStorage> StaticCredentialGate<S> {
    /// Gate over the built-in accounts.
    pub fn new(storage: S) -> Self {
        Self::with_credentials(default_credentials(), storage)
    }

    /// Gate over `credentials`, restoring any session found in `storage`.
    pub fn with_credentials(credentials: Vec<Credential>, storage: S) -> Self {
        let current = match storage.load() {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "ignoring unreadable session");
                None
            }
        };
        Self {
            credentials,
            storage,
            current,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: SessionStorage> SessionGate for StaticCredentialGate<S> {
    fn login(&mut self, username: &str, password: &str) -> bool {
        let Some(user) = self
            .credentials
            .iter()
            .find(|credential| credential.matches(username, password))
            .map(|credential| credential.user.clone())
        else {
            info!("login rejected");
            return false;
        };
        if let Err(err) = self.storage.save(&user) {
            warn!(error = %err, "session not persisted");
        }
        info!(user_id = %user.id, "logged in");
        self.current = Some(user);
        true
    }

    fn logout(&mut self) {
        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "session not cleared from storage");
        }
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "logged out");
        }
    }

    fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStorage;

    #[test]
    fn valid_login_starts_session() {
        let mut gate = StaticCredentialGate::new(MemorySessionStorage::default());
        assert!(gate.login("admin", "admin123"));
        let user = gate.current_user().unwrap();
        assert_eq!(user.id, "1");
        assert!(user.is_admin);
        assert_eq!(gate.storage().load().unwrap().as_ref(), Some(user));
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let mut gate = StaticCredentialGate::new(MemorySessionStorage::default());
        assert!(gate.login("user", "user123"));
        assert!(!gate.login("admin", "wrong"));
        assert_eq!(gate.current_user().map(|u| u.username.as_str()), Some("user"));
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let mut gate = StaticCredentialGate::new(MemorySessionStorage::default());
        gate.login("user", "user123");
        gate.logout();
        assert!(!gate.is_authenticated());
        assert!(gate.storage().load().unwrap().is_none());
    }

    #[test]
    fn password_is_case_sensitive() {
        let mut gate = StaticCredentialGate::new(MemorySessionStorage::default());
        assert!(!gate.login("admin", "ADMIN123"));
        assert!(!gate.login("Admin", "admin123"));
        assert!(!gate.is_authenticated());
    }
}
