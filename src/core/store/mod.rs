//! Secrets storage.
//!
//! The archive pipeline only talks to a store through the [`Store`] trait, so
//! any backend that can enumerate, write and delete secrets can be backed up
//! and restored.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the storage primitives of the `Store` trait
//! 2. Add the implementation in a new file (e.g., `remote.rs`)
//! 3. Re-export from this module
//!
//! `export` and `import` come for free: they are defined in terms of
//! `secrets_of` and `write` using the canonical JSON format.

use tracing::{debug, info};

use crate::core::types::{SecretKey, Secrets, ServiceName};
use crate::error::{Result, StoreError};

mod fs;
mod memory;

pub use fs::{Filesystem, SecretInfo};
pub use memory::Memory;

/// Key/value secrets store organized in services.
pub trait Store {
    /// All services currently present, sorted by name.
    fn list_services(&self) -> Result<Vec<ServiceName>>;

    /// All secrets of a service.
    ///
    /// Returns an empty map when the service does not exist.
    fn secrets_of(&self, service: &str) -> Result<Secrets>;

    /// Write (or overwrite) one secret.
    fn write(&mut self, service: &str, key: &str, value: &str) -> Result<()>;

    /// Delete one secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::KeyNotFound` if the key does not exist.
    fn delete(&mut self, service: &str, key: &str) -> Result<()>;

    /// Canonical serialization of a service: compact JSON object of key to value.
    fn export(&self, service: &str) -> Result<Vec<u8>> {
        let secrets = self.secrets_of(service)?;
        Ok(serde_json::to_vec(&secrets)?)
    }

    /// Parse canonical JSON and write every key into `service`.
    ///
    /// Keys already present in the service but absent from `bytes` are kept.
    ///
    /// # Returns
    ///
    /// Number of secrets written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if `bytes` is not a JSON object of strings.
    fn import(&mut self, service: &str, bytes: &[u8]) -> Result<usize> {
        let secrets: Secrets =
            serde_json::from_slice(bytes).map_err(|source| StoreError::Parse {
                service: service.to_string(),
                source,
            })?;

        debug!(service, count = secrets.len(), "importing secrets");
        for (key, value) in &secrets {
            self.write(service, key, value)?;
        }

        Ok(secrets.len())
    }
}

/// Delete every key of every service, leaving the store empty.
///
/// # Returns
///
/// Number of keys deleted.
///
/// # Errors
///
/// Stops at the first failing delete and returns its error.
pub fn wipe(store: &mut dyn Store) -> Result<usize> {
    let mut deleted = 0;
    for service in store.list_services()? {
        let keys: Vec<SecretKey> = store.secrets_of(&service)?.into_keys().collect();
        info!(service = %service, keys = keys.len(), "deleting");
        for key in keys {
            debug!(service = %service, key = %key, "delete");
            store.delete(&service, &key)?;
            deleted += 1;
        }
    }
    Ok(deleted)
}
