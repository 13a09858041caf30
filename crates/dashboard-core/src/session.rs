//! Session Gate
//!
//! Decides between the login and dashboard views from a flag kept in
//! browser storage.
//!
//! The flag is trusted as-is: there is no expiry and no server-side check,
//! so anyone able to write the storage key gets the dashboard view. The
//! backend endpoints themselves are not protected by it.

use log::{info, warn};

use crate::storage::FlagStore;

/// Stored value meaning "authenticated"
pub const AUTH_FLAG_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Flag not read yet
    Checking,
    Anonymous,
    Authenticated,
}

#[derive(Debug, Clone)]
pub struct SessionGate<S> {
    store: S,
    key: String,
}

impl<S: FlagStore> SessionGate<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted flag. Unreadable storage counts as logged out.
    pub async fn restore(&self) -> SessionState {
        match self.store.read(&self.key).await {
            Ok(Some(value)) if value == AUTH_FLAG_VALUE => SessionState::Authenticated,
            Ok(_) => SessionState::Anonymous,
            Err(e) => {
                warn!("[SESSION] cannot read {}: {}", self.key, e);
                SessionState::Anonymous
            }
        }
    }

    /// Persist the flag. A failed write still authenticates the current page.
    pub async fn login(&self) -> SessionState {
        if let Err(e) = self.store.write(&self.key, AUTH_FLAG_VALUE).await {
            warn!("[SESSION] flag not persisted, session ends with this page: {}", e);
        }
        info!("[SESSION] authenticated");
        SessionState::Authenticated
    }

    pub async fn logout(&self) -> SessionState {
        if let Err(e) = self.store.remove(&self.key).await {
            warn!("[SESSION] cannot clear {}: {}", self.key, e);
        }
        info!("[SESSION] logged out");
        SessionState::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryFlagStore;
    use async_trait::async_trait;

    const KEY: &str = "dashboard_auth";

    struct BrokenStore;

    #[async_trait(?Send)]
    impl FlagStore for BrokenStore {
        async fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        async fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Operation("quota exceeded".into()))
        }
        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_restore_requires_literal_true() {
        let gate = SessionGate::new(MemoryFlagStore::with_entry(KEY, "true"), KEY);
        assert_eq!(gate.restore().await, SessionState::Authenticated);

        let gate = SessionGate::new(MemoryFlagStore::with_entry(KEY, "yes"), KEY);
        assert_eq!(gate.restore().await, SessionState::Anonymous);

        let gate = SessionGate::new(MemoryFlagStore::new(), KEY);
        assert_eq!(gate.restore().await, SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let gate = SessionGate::new(MemoryFlagStore::new(), KEY);

        assert_eq!(gate.login().await, SessionState::Authenticated);
        assert_eq!(gate.store().get(KEY).as_deref(), Some("true"));
        assert_eq!(gate.restore().await, SessionState::Authenticated);

        assert_eq!(gate.logout().await, SessionState::Anonymous);
        assert_eq!(gate.store().get(KEY), None);
        assert_eq!(gate.restore().await, SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_storage_failures_are_not_fatal() {
        let gate = SessionGate::new(BrokenStore, KEY);
        assert_eq!(gate.restore().await, SessionState::Anonymous);
        assert_eq!(gate.login().await, SessionState::Authenticated);
        assert_eq!(gate.logout().await, SessionState::Anonymous);
    }
}
