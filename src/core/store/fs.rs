//! Filesystem-backed secrets store.
//!
//! A service is a directory path relative to the secrets root and every
//! secret is a file named after its key holding the value:
//!
//! ```text
//! secrets/
//! └── db/
//!     ├── prod/
//!     │   └── password
//!     └── dev/
//!         └── password
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use super::Store;
use crate::core::constants::SECRET_VERSION;
use crate::core::types::{SecretKey, SecretValue, Secrets, ServiceName};
use crate::core::validation::{validate_key, validate_service};
use crate::error::{Result, StoreError};

/// A secret together with its file metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretInfo {
    pub key: SecretKey,
    pub value: SecretValue,
    pub version: u32,
    pub modified: DateTime<Local>,
}

/// Secrets store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    /// Open the store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::NotFound(root).into());
        }
        debug!(root = %root.display(), "opened secrets directory");
        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn service_dir(&self, service: &str) -> Result<PathBuf> {
        validate_service(service)?;
        Ok(self.root.join(service))
    }

    fn secret_path(&self, service: &str, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.service_dir(service)?.join(key))
    }

    /// Read one secret with its metadata.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::KeyNotFound` if the secret does not exist.
    pub fn read(&self, service: &str, key: &str) -> Result<SecretInfo> {
        let path = self.secret_path(service, key)?;
        if !path.is_file() {
            return Err(StoreError::KeyNotFound {
                service: service.to_string(),
                key: key.to_string(),
            }
            .into());
        }
        read_info(&path, key)
    }

    /// List every secret of a service with its metadata, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ServiceNotFound` if the service directory does not exist.
    pub fn list(&self, service: &str) -> Result<Vec<SecretInfo>> {
        let dir = self.service_dir(service)?;
        if !dir.is_dir() {
            return Err(StoreError::ServiceNotFound(service.to_string()).into());
        }

        let mut infos = Vec::new();
        for (key, path) in secret_files(&dir)? {
            infos.push(read_info(&path, &key)?);
        }
        Ok(infos)
    }

    /// Remove now-empty directories from `dir` up to (not including) the root.
    fn prune(&self, mut dir: &Path) -> Result<()> {
        while dir != self.root && dir.starts_with(&self.root) {
            let is_empty = fs::read_dir(dir)
                .map_err(StoreError::ReadFailed)?
                .next()
                .is_none();
            if !is_empty {
                break;
            }
            debug!(dir = %dir.display(), "removing empty service directory");
            fs::remove_dir(dir).map_err(StoreError::WriteFailed)?;
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        Ok(())
    }
}

impl Store for Filesystem {
    fn list_services(&self) -> Result<Vec<ServiceName>> {
        let mut services = BTreeSet::new();
        collect_services(&self.root, &self.root, &mut services)?;
        Ok(services.into_iter().collect())
    }

    fn secrets_of(&self, service: &str) -> Result<Secrets> {
        let dir = self.service_dir(service)?;
        if !dir.is_dir() {
            return Ok(Secrets::new());
        }

        let mut secrets = Secrets::new();
        for (key, path) in secret_files(&dir)? {
            let value = fs::read_to_string(&path).map_err(StoreError::ReadFailed)?;
            secrets.insert(key, value.trim().to_string());
        }
        Ok(secrets)
    }

    fn write(&mut self, service: &str, key: &str, value: &str) -> Result<()> {
        let path = self.secret_path(service, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::WriteFailed)?;
        }
        debug!(service, key, "writing secret");
        fs::write(&path, value).map_err(StoreError::WriteFailed)?;
        Ok(())
    }

    fn delete(&mut self, service: &str, key: &str) -> Result<()> {
        let path = self.secret_path(service, key)?;
        if !path.is_file() {
            return Err(StoreError::KeyNotFound {
                service: service.to_string(),
                key: key.to_string(),
            }
            .into());
        }

        debug!(service, key, "deleting secret");
        fs::remove_file(&path).map_err(StoreError::WriteFailed)?;
        if let Some(parent) = path.parent() {
            self.prune(parent)?;
        }
        Ok(())
    }
}

/// Whether a file in a service directory counts as a secret.
///
/// Dotfiles and READMEs are documentation or tooling, not secrets.
fn is_secret_name(name: &str) -> bool {
    !name.starts_with('.') && !name.to_lowercase().starts_with("readme.")
}

/// Visible regular files in `dir` as `(key, path)` pairs, sorted by key.
fn secret_files(dir: &Path) -> Result<Vec<(SecretKey, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(StoreError::ReadFailed)? {
        let entry = entry.map_err(StoreError::ReadFailed)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if is_secret_name(&name) {
            files.push((name, path));
        }
    }
    files.sort();
    Ok(files)
}

fn collect_services(root: &Path, dir: &Path, services: &mut BTreeSet<ServiceName>) -> Result<()> {
    let mut has_secret = false;
    for entry in fs::read_dir(dir).map_err(StoreError::ReadFailed)? {
        let entry = entry.map_err(StoreError::ReadFailed)?;
        let path = entry.path();
        if path.is_dir() {
            collect_services(root, &path, services)?;
        } else if path.is_file() && is_secret_name(&entry.file_name().to_string_lossy()) {
            has_secret = true;
        }
    }

    if has_secret && dir != root {
        if let Ok(relative) = dir.strip_prefix(root) {
            let name: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            services.insert(name.join("/"));
        }
    }
    Ok(())
}

fn read_info(path: &Path, key: &str) -> Result<SecretInfo> {
    let value = fs::read_to_string(path).map_err(StoreError::ReadFailed)?;
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(StoreError::ReadFailed)?;

    Ok(SecretInfo {
        key: key.to_string(),
        value: value.trim().to_string(),
        version: SECRET_VERSION,
        modified: DateTime::<Local>::from(modified),
    })
}
