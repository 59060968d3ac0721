//! Key-value storage trait implemented by platform storage adapters.

use crate::errors::Result;

/// Durable key-value storage.
///
/// Values are opaque strings (the core always stores JSON). There is no
/// transactional guarantee across keys; callers sequence their writes.
pub trait StorageBackend: Send + Sync {
    /// Reads the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes every key in `keys`. Missing keys are not an error.
    fn remove(&self, keys: &[&str]) -> Result<()>;
}
