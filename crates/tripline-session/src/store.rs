//! Session store
//!
//! Single process-wide holder of "who is logged in", with durable recovery
//! across restarts. The persisted record lives under one fixed key in the
//! key-value store.

use parking_lot::RwLock;
use std::sync::Arc;

use tripline_storage::Store;

use crate::error::SessionError;
use crate::user::SessionUser;
use crate::Result;

/// Fixed storage key for the persisted session record.
const SESSION_KEY: &str = "user";

/// Session lifecycle states.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Startup recovery has not completed yet.
    Loading,
    /// No user is logged in.
    Empty,
    /// A user is logged in.
    Present(SessionUser),
}

pub struct SessionStore {
    /// In-memory session state
    state: Arc<RwLock<SessionState>>,
    /// Key-value store for persistence
    store: Store,
}

impl SessionStore {
    pub fn new(store: Store) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Loading)),
            store,
        }
    }

    /// Recover the persisted session, if any.
    ///
    /// Missing, unreadable, or unparseable records all resolve to an empty
    /// session; recovery never fails the caller. Returns the adopted user.
    pub fn initialize(&self) -> Option<SessionUser> {
        let loaded = match self.store.get(SESSION_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<SessionUser>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unparseable session record: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to read session record: {}", e);
                None
            }
        };

        *self.state.write() = match &loaded {
            Some(user) => SessionState::Present(user.clone()),
            None => SessionState::Empty,
        };

        if let Some(user) = &loaded {
            tracing::info!(user_id = ?user.user_id, "Restored session");
        }

        loaded
    }

    /// Log a user in and persist the record, overwriting any prior value.
    ///
    /// Rejects a record without a userID before any state change. The
    /// in-memory session is set before the write; a storage failure is
    /// returned so the caller can warn, but does not roll the session back.
    pub fn login(&self, user: SessionUser) -> Result<()> {
        if user.user_id.is_none() {
            return Err(SessionError::MissingUserId);
        }

        let json = serde_json::to_string(&user)?;

        *self.state.write() = SessionState::Present(user.clone());

        if let Err(e) = self.store.set(SESSION_KEY, &json) {
            tracing::error!("Failed to persist session record: {}", e);
            return Err(e.into());
        }

        tracing::info!(
            user_id = ?user.user_id,
            user_type = ?user.user_type,
            "Logged in"
        );

        Ok(())
    }

    /// Clear the session and drop the persisted record.
    ///
    /// Memory is cleared first; a storage removal failure is returned but
    /// the in-memory session stays empty.
    pub fn logout(&self) -> Result<()> {
        *self.state.write() = SessionState::Empty;

        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::error!("Failed to remove session record: {}", e);
            return Err(e.into());
        }

        tracing::info!("Logged out");

        Ok(())
    }

    /// Snapshot of the current user, if logged in.
    ///
    /// Synchronous; reflects memory, not necessarily durable storage while
    /// a write is in flight.
    pub fn current(&self) -> Option<SessionUser> {
        match &*self.state.read() {
            SessionState::Present(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// Snapshot of the full lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state.read(), SessionState::Loading)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(*self.state.read(), SessionState::Present(_))
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: self.store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Store::open_in_memory().unwrap())
    }

    #[test]
    fn test_starts_loading_until_initialized() {
        let session = store();
        assert!(session.is_loading());

        assert_eq!(session.initialize(), None);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_login_requires_user_id() {
        let session = store();
        session.initialize();

        let user: SessionUser = serde_json::from_str(r#"{"username":"ghost"}"#).unwrap();
        let err = session.login(user).unwrap_err();
        assert!(matches!(err, SessionError::MissingUserId));

        // Session unchanged
        assert_eq!(session.current(), None);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_login_sets_current() {
        let session = store();
        session.initialize();

        let user = SessionUser::new(42, "client");
        session.login(user.clone()).unwrap();

        assert_eq!(session.current(), Some(user));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_logout_clears_session() {
        let session = store();
        session.initialize();

        session.login(SessionUser::new(42, "client")).unwrap();
        session.logout().unwrap();

        assert_eq!(session.current(), None);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_initialize_restores_persisted_session() {
        let kv = Store::open_in_memory().unwrap();

        let first = SessionStore::new(kv.clone());
        first.initialize();
        first.login(SessionUser::new(7, "admin")).unwrap();

        // A fresh store over the same storage recovers without a new login
        let second = SessionStore::new(kv);
        let restored = second.initialize().unwrap();
        assert_eq!(restored.user_id, Some(7));
        assert_eq!(second.current().unwrap().user_type.as_deref(), Some("admin"));
    }

    #[test]
    fn test_initialize_with_garbage_record() {
        let kv = Store::open_in_memory().unwrap();
        kv.set("user", "not json at all").unwrap();

        let session = SessionStore::new(kv);
        assert_eq!(session.initialize(), None);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_last_operation_wins() {
        let session = store();
        session.initialize();

        let user = SessionUser::new(42, "client");
        session.login(user.clone()).unwrap();
        session.logout().unwrap();
        assert_eq!(session.current(), None);

        session.logout().unwrap();
        session.login(user.clone()).unwrap();
        assert_eq!(session.current(), Some(user));
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let kv = Store::open_in_memory().unwrap();
        let session = SessionStore::new(kv.clone());
        session.initialize();

        session.login(SessionUser::new(1, "client")).unwrap();
        session.login(SessionUser::new(2, "admin")).unwrap();

        assert_eq!(session.current().unwrap().user_id, Some(2));

        // Storage holds the latest record only
        let stored: SessionUser =
            serde_json::from_str(&kv.get("user").unwrap().unwrap()).unwrap();
        assert_eq!(stored.user_id, Some(2));
    }
}
