//! Search across every service of a store.

use tracing::debug;

use crate::core::store::Store;
use crate::core::types::{SecretKey, ServiceName};
use crate::error::Result;

/// A secret matched by [`find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub service: ServiceName,
    pub key: SecretKey,
}

/// Find secrets by key name, or by exact value when `by_value` is set.
///
/// Matches are ordered by service, then key.
pub fn find(store: &dyn Store, needle: &str, by_value: bool) -> Result<Vec<Match>> {
    let mut matches = Vec::new();
    for service in store.list_services()? {
        for (key, value) in store.secrets_of(&service)? {
            let hit = if by_value { value == needle } else { key == needle };
            if hit {
                matches.push(Match {
                    service: service.clone(),
                    key,
                });
            }
        }
    }
    debug!(needle_len = needle.len(), by_value, found = matches.len(), "search done");
    Ok(matches)
}
