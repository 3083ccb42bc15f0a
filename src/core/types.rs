//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A slash-delimited service path (e.g., `db/prod`).
pub type ServiceName = String;

/// A secret key name within a service (e.g., `password`).
pub type SecretKey = String;

/// A plaintext secret value.
pub type SecretValue = String;

/// All secrets of one service, ordered by key.
///
/// The ordering makes the canonical JSON export stable between runs.
pub type Secrets = BTreeMap<SecretKey, SecretValue>;
