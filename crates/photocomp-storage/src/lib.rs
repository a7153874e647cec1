//! Durable key/value storage for the PhotoComp client.
//!
//! The client persists exactly two values between runs, the session token
//! and the signed-in user record, under the keys in [`SessionKeys`]. The
//! [`DurableStore`] trait keeps the backend swappable; the default backend
//! is a private JSON file under `~/.photocomp`.

mod file;
mod keys;
mod traits;
mod vault;

pub use file::FileStore;
pub use keys::SessionKeys;
pub use traits::DurableStore;
pub use vault::SessionVault;

use photocomp_config::Paths;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific storage error
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Key not found
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default file-backed store under `~/.photocomp`.
pub fn create_store() -> StorageResult<Box<dyn DurableStore>> {
    let paths = Paths::new().map_err(|e| StorageError::Backend(e.to_string()))?;
    paths
        .ensure_dirs()
        .map_err(|e| StorageError::Backend(e.to_string()))?;
    let store = FileStore::open(paths.session_file())?;
    Ok(Box::new(store))
}

/// Create a [`SessionVault`] over the default store.
pub fn create_session_vault() -> StorageResult<SessionVault> {
    let store = create_store()?;
    Ok(SessionVault::new(store))
}
