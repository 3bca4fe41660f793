//! Session persistence over browser-style key/value storage tiers

use crate::role::Role;
use crate::session::Session;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage key for the bearer token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key for the session role
pub const ROLE_KEY: &str = "role";

/// Storage failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read {key}: {message}")]
    Read { key: String, message: String },

    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("Failed to remove {key}: {message}")]
    Remove { key: String, message: String },
}

/// Minimal string key/value store, shaped after the Web Storage API
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// In-memory storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and stores the session
pub trait SessionPersistence {
    /// Read the persisted session, if a complete one exists
    fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Persist the session
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove every persisted trace of a session
    fn clear(&self) -> Result<(), StorageError>;
}

/// Session-scoped primary tier with a long-lived legacy tier that is only
/// ever cleaned, never read.
pub struct TieredPersistence<S, L> {
    session_tier: S,
    legacy_tier: L,
}

impl<S: KeyValueStorage, L: KeyValueStorage> TieredPersistence<S, L> {
    pub const fn new(session_tier: S, legacy_tier: L) -> Self {
        Self {
            session_tier,
            legacy_tier,
        }
    }

    fn remove_keys(tier: &dyn KeyValueStorage) -> Result<(), StorageError> {
        let token = tier.remove_item(ACCESS_TOKEN_KEY);
        let role = tier.remove_item(ROLE_KEY);
        token.and(role)
    }
}

impl<S: KeyValueStorage, L: KeyValueStorage> SessionPersistence for TieredPersistence<S, L> {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        let token = self.session_tier.get_item(ACCESS_TOKEN_KEY)?;
        let role = self.session_tier.get_item(ROLE_KEY)?;

        match (token, role) {
            (Some(token), Some(role)) if !token.is_empty() && !role.is_empty() => {
                Ok(Some(Session {
                    token,
                    role: Role::from(role),
                }))
            }
            (None, None) => Ok(None),
            _ => {
                tracing::warn!("Ignoring incomplete persisted session");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.session_tier
            .set_item(ACCESS_TOKEN_KEY, &session.token)?;
        self.session_tier
            .set_item(ROLE_KEY, session.role.as_str())?;
        Self::remove_keys(&self.legacy_tier)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let session = Self::remove_keys(&self.session_tier);
        let legacy = Self::remove_keys(&self.legacy_tier);
        session.and(legacy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage whose removals always fail
    struct FailingRemoval {
        inner: MemoryStorage,
    }

    impl KeyValueStorage for FailingRemoval {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Remove {
                key: key.to_string(),
                message: "quota".to_string(),
            })
        }
    }

    fn tiers() -> (MemoryStorage, MemoryStorage) {
        (MemoryStorage::new(), MemoryStorage::new())
    }

    #[test]
    fn test_load_empty_storage() {
        let (session, legacy) = tiers();
        let persistence = TieredPersistence::new(session, legacy);
        assert_eq!(persistence.load().unwrap(), None);
    }

    #[test]
    fn test_save_writes_session_tier_and_cleans_legacy() {
        let (session, legacy) = tiers();
        legacy.set_item(ACCESS_TOKEN_KEY, "stale").unwrap();
        legacy.set_item(ROLE_KEY, "admin").unwrap();

        let persistence = TieredPersistence::new(session.clone(), legacy.clone());
        persistence.save(&Session::new("abc", Role::Doctor)).unwrap();

        assert_eq!(
            session.get_item(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(session.get_item(ROLE_KEY).unwrap().as_deref(), Some("doctor"));
        assert!(legacy.is_empty());
    }

    #[test]
    fn test_load_ignores_legacy_tier() {
        let (session, legacy) = tiers();
        legacy.set_item(ACCESS_TOKEN_KEY, "old").unwrap();
        legacy.set_item(ROLE_KEY, "patient").unwrap();

        let persistence = TieredPersistence::new(session, legacy);
        assert_eq!(persistence.load().unwrap(), None);
    }

    #[test]
    fn test_partial_session_is_not_loaded() {
        let (session, legacy) = tiers();
        session.set_item(ACCESS_TOKEN_KEY, "abc").unwrap();

        let persistence = TieredPersistence::new(session.clone(), legacy);
        assert_eq!(persistence.load().unwrap(), None);

        session.remove_item(ACCESS_TOKEN_KEY).unwrap();
        session.set_item(ROLE_KEY, "admin").unwrap();
        assert_eq!(persistence.load().unwrap(), None);
    }

    #[test]
    fn test_empty_values_are_not_a_session() {
        let (session, legacy) = tiers();
        session.set_item(ACCESS_TOKEN_KEY, "").unwrap();
        session.set_item(ROLE_KEY, "admin").unwrap();

        let persistence = TieredPersistence::new(session, legacy);
        assert_eq!(persistence.load().unwrap(), None);
    }

    #[test]
    fn test_clear_removes_both_tiers() {
        let (session, legacy) = tiers();
        session.set_item(ACCESS_TOKEN_KEY, "abc").unwrap();
        session.set_item(ROLE_KEY, "admin").unwrap();
        legacy.set_item(ACCESS_TOKEN_KEY, "old").unwrap();
        legacy.set_item(ROLE_KEY, "admin").unwrap();
        session.set_item("theme", "dark").unwrap();

        let persistence = TieredPersistence::new(session.clone(), legacy.clone());
        persistence.clear().unwrap();

        assert_eq!(session.len(), 1);
        assert_eq!(session.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert!(legacy.is_empty());
    }

    #[test]
    fn test_clear_attempts_every_tier_before_failing() {
        let session = MemoryStorage::new();
        session.set_item(ACCESS_TOKEN_KEY, "abc").unwrap();
        session.set_item(ROLE_KEY, "admin").unwrap();
        let legacy = FailingRemoval {
            inner: MemoryStorage::new(),
        };

        let persistence = TieredPersistence::new(session.clone(), legacy);
        let result = persistence.clear();

        assert!(matches!(result, Err(StorageError::Remove { .. })));
        assert!(session.is_empty());
    }
}
