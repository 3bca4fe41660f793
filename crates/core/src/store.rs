//! Observable authentication store

use crate::persistence::SessionPersistence;
use crate::role::Role;
use crate::session::Session;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Option<&Session>)>;

struct Inner {
    session: RefCell<Option<Session>>,
    persistence: Box<dyn SessionPersistence>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

/// Current session, shared by the HTTP client, the navigation guard and the UI
///
/// Clones share state. Every mutation is written through to persistence and
/// then announced to subscribers before the call returns.
#[derive(Clone)]
pub struct AuthStore {
    inner: Rc<Inner>,
}

impl AuthStore {
    /// Build a store, restoring any session persistence already holds
    pub fn hydrate(persistence: impl SessionPersistence + 'static) -> Self {
        let session = match persistence.load() {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(%error, "Failed to restore session, starting signed out");
                None
            }
        };

        tracing::debug!(
            role = session.as_ref().map(|s| s.role.as_str()),
            "Auth store hydrated"
        );

        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(session),
                persistence: Box::new(persistence),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current session
    pub fn read(&self) -> Option<Session> {
        self.inner.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.role.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_some()
    }

    /// Replace the session with a new token and role
    ///
    /// An empty token or role cannot be restored after a reload, so it
    /// signs out instead.
    pub fn set_auth(&self, token: impl Into<String>, role: impl Into<Role>) {
        let session = Session::new(token, role);
        if session.token.is_empty() || session.role.as_str().is_empty() {
            tracing::warn!("Empty token or role, clearing session");
            self.clear();
            return;
        }

        if let Err(error) = self.inner.persistence.save(&session) {
            tracing::warn!(%error, "Failed to persist session");
        }

        tracing::debug!(role = %session.role, "Session set");
        *self.inner.session.borrow_mut() = Some(session);
        self.notify();
    }

    /// Drop the session from memory and from every storage tier
    pub fn clear(&self) {
        if let Err(error) = self.inner.persistence.clear() {
            tracing::warn!(%error, "Failed to clear persisted session");
        }

        self.inner.session.borrow_mut().take();
        tracing::debug!("Session cleared");
        self.notify();
    }

    /// Register a listener called after every mutation
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self) {
        let session = self.read();
        // Listeners may read the store or (un)subscribe, so call them on a copy.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(session.as_ref());
        }
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("session", &self.inner.session.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Handle for a store listener; unsubscribes on drop
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{
        KeyValueStorage, MemoryStorage, StorageError, TieredPersistence, ACCESS_TOKEN_KEY,
        ROLE_KEY,
    };

    fn storage() -> (MemoryStorage, MemoryStorage) {
        (MemoryStorage::new(), MemoryStorage::new())
    }

    fn store_over(session: &MemoryStorage, legacy: &MemoryStorage) -> AuthStore {
        AuthStore::hydrate(TieredPersistence::new(session.clone(), legacy.clone()))
    }

    struct BrokenPersistence;

    impl SessionPersistence for BrokenPersistence {
        fn load(&self) -> Result<Option<Session>, StorageError> {
            Err(StorageError::Unavailable("private mode".to_string()))
        }

        fn save(&self, _session: &Session) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("private mode".to_string()))
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("private mode".to_string()))
        }
    }

    #[test]
    fn test_cold_start_without_session() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        assert_eq!(store.read(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.role(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_auth_survives_reload() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        store.set_auth("abc", "doctor");

        let reloaded = store_over(&session, &legacy);
        assert_eq!(reloaded.read(), Some(Session::new("abc", Role::Doctor)));
    }

    #[test]
    fn test_set_auth_removes_legacy_entries() {
        let (session, legacy) = storage();
        legacy.set_item(ACCESS_TOKEN_KEY, "stale").unwrap();
        legacy.set_item(ROLE_KEY, "admin").unwrap();

        let store = store_over(&session, &legacy);
        store.set_auth("fresh", Role::Patient);

        assert!(legacy.is_empty());
        assert_eq!(store.token().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_empty_token_or_role_signs_out() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);

        for (token, role) in [("tok", ""), ("", "admin")] {
            store.set_auth("abc", Role::Admin);
            store.set_auth(token, role);

            assert!(!store.is_authenticated(), "{token:?}/{role:?}");
            assert_eq!(store.token(), None);
            assert!(session.is_empty());
            assert_eq!(store_over(&session, &legacy).read(), store.read());
        }
    }

    #[test]
    fn test_clear_resets_memory_and_storage() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        store.set_auth("abc", Role::Admin);
        legacy.set_item(ROLE_KEY, "admin").unwrap();

        store.clear();

        assert_eq!(store.read(), None);
        assert!(session.is_empty());
        assert!(legacy.is_empty());
        assert_eq!(store_over(&session, &legacy).read(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        store.set_auth("abc", Role::Admin);

        store.clear();
        let once = (store.read(), session.len(), legacy.len());
        store.clear();
        let twice = (store.read(), session.len(), legacy.len());

        assert_eq!(once, twice);
        assert_eq!(twice, (None, 0, 0));
    }

    #[test]
    fn test_clones_share_state() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        let other = store.clone();

        store.set_auth("abc", Role::Patient);
        assert_eq!(other.role(), Some(Role::Patient));

        other.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = seen.clone();
            store.subscribe(move |session| {
                seen.borrow_mut()
                    .push(session.map(|s| s.role.as_str().to_string()));
            })
        };

        store.set_auth("abc", Role::Admin);
        store.clear();

        assert_eq!(*seen.borrow(), vec![Some("admin".to_string()), None]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };
        store.set_auth("abc", Role::Admin);
        drop(subscription);
        store.clear();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_listener_may_read_store() {
        let (session, legacy) = storage();
        let store = store_over(&session, &legacy);
        let observed = Rc::new(RefCell::new(None));

        let _subscription = {
            let reader = store.clone();
            let observed = observed.clone();
            store.subscribe(move |_| *observed.borrow_mut() = reader.token())
        };
        store.set_auth("xyz", Role::Doctor);

        assert_eq!(observed.borrow().as_deref(), Some("xyz"));
    }

    #[test]
    fn test_storage_failures_do_not_block_mutations() {
        let store = AuthStore::hydrate(BrokenPersistence);
        assert_eq!(store.read(), None);

        store.set_auth("abc", Role::Admin);
        assert_eq!(store.role(), Some(Role::Admin));

        store.clear();
        assert_eq!(store.read(), None);
    }
}
