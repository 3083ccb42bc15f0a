//! Archive writer.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::{NamedTempFile, TempDir};
use tracing::{debug, info, warn};

use super::layout::{entry_name, Label};
use crate::core::constants::ARCHIVE_EXTENSION;
use crate::core::store::Store;
use crate::error::{ArchiveError, Result};

/// Writes a snapshot of a store to a tar.gz archive.
#[derive(Debug, Clone)]
pub struct Backup {
    label: Label,
    tarball: PathBuf,
}

impl Backup {
    /// Prepare a backup into `output_dir`.
    ///
    /// The archive is named `file_name` when given, `<label>.tgz` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::OutputDir` if `output_dir` does not exist.
    pub fn new(output_dir: &Path, file_name: Option<&str>) -> Result<Self> {
        Self::with_label(Label::now(), output_dir, file_name)
    }

    /// Prepare a backup with an explicit label.
    pub fn with_label(label: Label, output_dir: &Path, file_name: Option<&str>) -> Result<Self> {
        let output_dir = fs::canonicalize(output_dir).map_err(|source| ArchiveError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let tarball = match file_name {
            Some(name) => output_dir.join(name),
            None => output_dir.join(format!("{}.{}", label, ARCHIVE_EXTENSION)),
        };

        Ok(Self { label, tarball })
    }

    /// Label directory written inside the archive.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Absolute path of the archive this backup writes.
    pub fn tarball(&self) -> &Path {
        &self.tarball
    }

    /// Snapshot every service of `store` into the archive.
    ///
    /// The archive is assembled next to its destination and renamed into
    /// place once complete, so a failure never leaves a partial file behind.
    ///
    /// # Returns
    ///
    /// The absolute path of the archive written.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::EntryCollision` if two services map to the same
    /// entry name, store errors from `export`, and `ArchiveError::Write` if
    /// the archive cannot be written.
    pub fn write(&self, store: &dyn Store) -> Result<PathBuf> {
        let staging = TempDir::new()?;
        let backup_dir = staging.path().join(self.label.as_str());
        fs::create_dir(&backup_dir)?;

        let services = store.list_services()?;
        let mut seen: HashMap<String, &str> = HashMap::new();
        for service in &services {
            let entry = entry_name(service);
            if let Some(first) = seen.insert(entry.clone(), service) {
                return Err(ArchiveError::EntryCollision {
                    entry,
                    first: first.to_string(),
                    second: service.clone(),
                }
                .into());
            }
            if service.contains('.') {
                warn!(
                    service = %service,
                    "service name contains '.', it will be restored as '{}'",
                    service.replace('.', "/")
                );
            }

            info!(service = %service, entry = %entry, "exporting");
            let bytes = store.export(service)?;
            fs::write(backup_dir.join(&entry), bytes)?;
        }

        self.compress(&backup_dir)?;
        info!(
            services = services.len(),
            tarball = %self.tarball.display(),
            "backup written"
        );
        Ok(self.tarball.clone())
    }

    fn compress(&self, backup_dir: &Path) -> Result<()> {
        let write_err = |source| ArchiveError::Write {
            path: self.tarball.clone(),
            source,
        };

        let parent = self.tarball.parent().unwrap_or_else(|| Path::new("."));
        let partial = NamedTempFile::new_in(parent).map_err(write_err)?;

        let mut builder = tar::Builder::new(GzEncoder::new(partial, Compression::default()));
        builder
            .append_dir_all(self.label.as_str(), backup_dir)
            .map_err(write_err)?;
        let mut partial = builder
            .into_inner()
            .and_then(GzEncoder::finish)
            .map_err(write_err)?;
        partial.flush().map_err(write_err)?;

        debug!(tarball = %self.tarball.display(), "moving archive into place");
        partial
            .persist(&self.tarball)
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
