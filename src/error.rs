//! Error types.
//!
//! Every fallible operation returns [`Result`]. Domain failures are grouped
//! into sub-enums so callers can match on the category they care about.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures raised by a secrets store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secrets directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("service not found: {0}")]
    ServiceNotFound(String),

    #[error("secret not found: {service}/{key}")]
    KeyNotFound { service: String, key: String },

    #[error("failed to parse secrets for service '{service}': {source}")]
    Parse {
        service: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read secret: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write secret: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Structural problems with an archive, or failures producing one.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("attempted path traversal in archive entry: {entry}")]
    PathTraversal { entry: String },

    #[error("unsupported {kind} entry in archive: {entry}")]
    UnsupportedEntry { entry: String, kind: String },

    #[error("archive {} has no backup label directory", .tarball.display())]
    MissingLabel { tarball: PathBuf },

    #[error(
        "archive {} must hold exactly one backup label directory, found: {}",
        .tarball.display(),
        .found.join(", ")
    )]
    UnexpectedLayout { tarball: PathBuf, found: Vec<String> },

    #[error("services '{first}' and '{second}' both map to archive entry '{entry}'")]
    EntryCollision {
        entry: String,
        first: String,
        second: String,
    },

    #[error("output directory {} is not usable: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read archive {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write archive {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected service names and secret keys.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("service name cannot be empty")]
    EmptyService,

    #[error("invalid service name '{service}': {reason}")]
    InvalidService { service: String, reason: String },

    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("invalid secret key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

/// Problems with `local-chamber.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
