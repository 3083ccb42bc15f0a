//! Safe extraction of untrusted tar.gz archives.
//!
//! Every entry is checked before anything is written: it must be a regular
//! file or a directory, and its destination, resolved lexically under the
//! target directory, must stay inside that directory. Links, devices and
//! other special entries never occur in a backup and are refused outright.
//! A single offending entry rejects the whole archive.

use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::error::{ArchiveError, Result};

/// Open a tar.gz archive for reading.
fn open(tarball: &Path) -> Result<Archive<GzDecoder<BufReader<File>>>> {
    let file = File::open(tarball).map_err(|source| ArchiveError::Read {
        path: tarball.to_path_buf(),
        source,
    })?;
    Ok(Archive::new(GzDecoder::new(BufReader::new(file))))
}

/// Resolve `path` lexically against a virtual root.
///
/// Returns the normalized relative path, or `None` if the path is absolute or
/// climbs above the root.
fn contained(path: &Path) -> Option<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Check every entry of `tarball` without writing anything.
///
/// # Returns
///
/// Number of entries checked.
///
/// # Errors
///
/// Returns `ArchiveError::UnsupportedEntry` for the first entry that is not a
/// regular file or directory, and `ArchiveError::PathTraversal` for the first
/// entry whose path would resolve outside the extraction directory.
pub fn validate(tarball: &Path) -> Result<usize> {
    let mut archive = open(tarball)?;
    let read_err = |source| ArchiveError::Read {
        path: tarball.to_path_buf(),
        source,
    };

    let mut checked = 0;
    for entry in archive.entries().map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let raw = String::from_utf8_lossy(&entry.path_bytes()).to_string();

        let kind = entry.header().entry_type();
        if !(kind.is_file() || kind.is_dir()) {
            return Err(ArchiveError::UnsupportedEntry {
                entry: raw,
                kind: format!("{:?}", kind),
            }
            .into());
        }

        let path = entry.path().map_err(read_err)?;
        if contained(&path).is_none() {
            return Err(ArchiveError::PathTraversal { entry: raw }.into());
        }

        debug!(entry = %raw, "archive entry ok");
        checked += 1;
    }
    Ok(checked)
}

/// Extract `tarball` into `dest` after validating every entry.
///
/// Nothing is written to `dest` unless the whole archive passes validation.
///
/// # Errors
///
/// Returns `ArchiveError::PathTraversal` or `ArchiveError::UnsupportedEntry`
/// for hostile archives and
/// `ArchiveError::Read` if the archive cannot be decoded.
pub fn safe_unpack(tarball: &Path, dest: &Path) -> Result<usize> {
    let entries = validate(tarball)?;

    let mut archive = open(tarball)?;
    archive
        .unpack(dest)
        .map_err(|source| ArchiveError::Read {
            path: tarball.to_path_buf(),
            source,
        })?;

    debug!(entries, dest = %dest.display(), "archive extracted");
    Ok(entries)
}
