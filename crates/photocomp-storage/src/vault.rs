//! High-level API for the persisted session values.

use photocomp_types::User;

use crate::{DurableStore, SessionKeys, StorageError, StorageResult};

/// Typed facade over the two persisted session keys.
pub struct SessionVault {
    store: Box<dyn DurableStore>,
}

impl SessionVault {
    /// Create a new vault over the given storage backend.
    pub fn new(store: Box<dyn DurableStore>) -> Self {
        Self { store }
    }

    // ==========================================
    // Token
    // ==========================================

    /// Store the bearer token
    pub fn store_token(&self, token: &str) -> StorageResult<()> {
        self.store.set(SessionKeys::TOKEN, token)
    }

    /// Retrieve the bearer token
    pub fn token(&self) -> StorageResult<Option<String>> {
        self.store.get(SessionKeys::TOKEN)
    }

    /// Check whether a token is persisted
    pub fn has_token(&self) -> StorageResult<bool> {
        self.store.has(SessionKeys::TOKEN)
    }

    /// Delete the bearer token
    pub fn clear_token(&self) -> StorageResult<()> {
        self.store.delete(SessionKeys::TOKEN).map(|_| ())
    }

    // ==========================================
    // User record
    // ==========================================

    /// Store the signed-in user record (JSON)
    pub fn store_user(&self, user: &User) -> StorageResult<()> {
        let json =
            serde_json::to_string(user).map_err(|e| StorageError::Encoding(e.to_string()))?;
        self.store.set(SessionKeys::USER, &json)
    }

    /// Retrieve the signed-in user record.
    ///
    /// Returns an `Encoding` error when the persisted JSON no longer
    /// parses; callers treat that as a corrupt session.
    pub fn user(&self) -> StorageResult<Option<User>> {
        match self.store.get(SessionKeys::USER)? {
            Some(json) => {
                let user: User = serde_json::from_str(&json)
                    .map_err(|e| StorageError::Encoding(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Delete the user record
    pub fn clear_user(&self) -> StorageResult<()> {
        self.store.delete(SessionKeys::USER).map(|_| ())
    }

    // ==========================================
    // Whole session
    // ==========================================

    /// Clear both persisted session keys
    pub fn clear_session(&self) -> StorageResult<()> {
        let _ = self.store.delete(SessionKeys::TOKEN);
        let _ = self.store.delete(SessionKeys::USER);
        Ok(())
    }
}
