//! Storage trait definitions.

use crate::StorageResult;

/// Trait for durable key/value backends.
///
/// Calls are synchronous: a successful `set` or `delete` has reached the
/// backing medium by the time it returns.
pub trait DurableStore: Send + Sync {
    /// Store a value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Retrieve a value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Delete a value, reporting whether it existed
    fn delete(&self, key: &str) -> StorageResult<bool>;

    /// Check if a key exists
    fn has(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
