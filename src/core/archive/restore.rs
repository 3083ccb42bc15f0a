//! Archive reader.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, warn};

use super::extract;
use super::layout::{service_name, Label};
use crate::core::store::{wipe, Store};
use crate::core::types::{Secrets, ServiceName};
use crate::core::validation::{validate_key, validate_service};
use crate::error::{ArchiveError, Result, StoreError};

/// Restores a store from a tar.gz archive.
#[derive(Debug, Clone)]
pub struct Restore {
    tarball: PathBuf,
    patch: bool,
}

/// Outcome of a successful restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Label directory found in the archive.
    pub label: Label,
    /// Number of services imported.
    pub services: usize,
    /// Number of keys deleted before the import.
    pub deleted: usize,
    /// Archive the services were read from.
    pub tarball: PathBuf,
}

impl fmt::Display for RestoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Restored {} services from {}",
            self.services,
            self.tarball.display()
        )
    }
}

impl Restore {
    /// Prepare a restore from `tarball`.
    ///
    /// With `patch` set, existing secrets are kept and only the archive's keys
    /// are written. Without it, the store is emptied first so the result
    /// matches the archive exactly.
    pub fn new(tarball: impl Into<PathBuf>, patch: bool) -> Self {
        Self {
            tarball: tarball.into(),
            patch,
        }
    }

    /// Archive being restored.
    pub fn tarball(&self) -> &Path {
        &self.tarball
    }

    /// Whether existing secrets are kept.
    pub fn is_patch(&self) -> bool {
        self.patch
    }

    /// Restore `store` from the archive.
    ///
    /// The archive is extracted, its layout verified and every record parsed
    /// and validated before the store is touched, so a hostile or malformed
    /// archive leaves the store intact.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::PathTraversal` or `ArchiveError::UnsupportedEntry`
    /// for entries that may not be extracted, `ArchiveError::MissingLabel` or
    /// `ArchiveError::UnexpectedLayout` for archives without exactly one label
    /// directory, `StoreError::Parse` or a `ValidationError` for bad records,
    /// and the first store error hit while deleting or importing.
    pub fn read(&self, store: &mut dyn Store) -> Result<RestoreSummary> {
        let staging = TempDir::new()?;

        info!(tarball = %self.tarball.display(), "extracting");
        extract::safe_unpack(&self.tarball, staging.path())?;
        let label = self.find_label(staging.path())?;
        let records = load_records(&staging.path().join(label.as_str()))?;

        let deleted = if self.patch {
            0
        } else {
            let deleted = wipe(store)?;
            info!(deleted, "existing secrets deleted");
            deleted
        };

        for (service, bytes) in &records {
            info!(service = %service, "importing");
            store.import(service, bytes)?;
        }

        Ok(RestoreSummary {
            label,
            services: records.len(),
            deleted,
            tarball: self.tarball.clone(),
        })
    }

    /// Find the single label directory at the root of the extracted archive.
    fn find_label(&self, staging: &Path) -> Result<Label> {
        let mut top_level = Vec::new();
        for entry in fs::read_dir(staging)? {
            top_level.push(entry?);
        }

        let labels: Vec<Label> = top_level
            .iter()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| Label::parse(&e.file_name().to_string_lossy()))
            .collect();

        match (labels.as_slice(), top_level.len()) {
            ([label], 1) => {
                debug!(label = %label, "found backup label");
                Ok(label.clone())
            }
            ([], _) => Err(ArchiveError::MissingLabel {
                tarball: self.tarball.clone(),
            }
            .into()),
            _ => {
                let mut found: Vec<String> = top_level
                    .iter()
                    .map(|e| e.file_name().to_string_lossy().to_string())
                    .collect();
                found.sort();
                Err(ArchiveError::UnexpectedLayout {
                    tarball: self.tarball.clone(),
                    found,
                }
                .into())
            }
        }
    }
}

/// Read and check every service record in the label directory.
///
/// Returns `(service, canonical bytes)` pairs sorted by entry name. Files
/// without the `.json` extension are skipped.
fn load_records(dir: &Path) -> Result<Vec<(ServiceName, Vec<u8>)>> {
    let mut records = Vec::new();
    for (entry, path) in entry_files(dir)? {
        let Some(service) = service_name(&entry) else {
            warn!(entry = %entry, "skipping non-service file in archive");
            continue;
        };
        validate_service(&service)?;

        let bytes = fs::read(&path)?;
        let secrets: Secrets =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                service: service.clone(),
                source,
            })?;
        for key in secrets.keys() {
            validate_key(key)?;
        }

        debug!(service = %service, keys = secrets.len(), "record ok");
        records.push((service, bytes));
    }
    Ok(records)
}

/// Regular files directly inside `dir` as `(file name, path)`, sorted by name.
fn entry_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() {
            files.push((entry.file_name().to_string_lossy().to_string(), path));
        }
    }
    files.sort();
    Ok(files)
}
