//! In-memory store.

use std::collections::BTreeMap;

use super::Store;
use crate::core::types::{Secrets, ServiceName};
use crate::core::validation::{validate_key, validate_service};
use crate::error::{Result, StoreError};

/// Store that keeps every service in a map.
///
/// A service exists while it holds at least one secret, matching how the
/// filesystem store reports services.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Memory {
    services: BTreeMap<ServiceName, Secrets>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of secrets across all services.
    pub fn len(&self) -> usize {
        self.services.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no secrets.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Store for Memory {
    fn list_services(&self) -> Result<Vec<ServiceName>> {
        Ok(self.services.keys().cloned().collect())
    }

    fn secrets_of(&self, service: &str) -> Result<Secrets> {
        Ok(self.services.get(service).cloned().unwrap_or_default())
    }

    fn write(&mut self, service: &str, key: &str, value: &str) -> Result<()> {
        validate_service(service)?;
        validate_key(key)?;
        self.services
            .entry(service.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, service: &str, key: &str) -> Result<()> {
        let not_found = || StoreError::KeyNotFound {
            service: service.to_string(),
            key: key.to_string(),
        };

        let secrets = self.services.get_mut(service).ok_or_else(not_found)?;
        secrets.remove(key).ok_or_else(not_found)?;
        if secrets.is_empty() {
            self.services.remove(service);
        }
        Ok(())
    }
}
