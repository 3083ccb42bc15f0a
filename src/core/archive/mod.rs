//! Backup and restore of a whole store to a tar.gz archive.
//!
//! # Archive format
//!
//! A gzip-compressed tar whose root holds exactly one label directory,
//! `<YYYYMMDD_HHMMSS>_chamber`. Every service is one file directly under it,
//! named after the service with `/` replaced by `.` plus a `.json` extension,
//! holding the store's canonical JSON export of that service.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use local_chamber::core::archive::{Backup, Restore};
//! use local_chamber::core::store::Filesystem;
//!
//! # fn main() -> local_chamber::error::Result<()> {
//! let mut store = Filesystem::open("secrets")?;
//! let tarball = Backup::new(Path::new("."), None)?.write(&store)?;
//!
//! let summary = Restore::new(&tarball, false).read(&mut store)?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

mod backup;
mod extract;
mod layout;
mod restore;

pub use backup::Backup;
pub use extract::{safe_unpack, validate};
pub use layout::{entry_name, service_name, Label};
pub use restore::{Restore, RestoreSummary};
