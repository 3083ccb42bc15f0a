//! Constants used throughout local-chamber.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "local-chamber.toml";

/// Default secrets directory relative to the working directory.
pub const DEFAULT_SECRETS_DIR: &str = "secrets";

/// Default directory for new backups.
pub const DEFAULT_BACKUP_DIR: &str = ".";

/// Suffix appended to the timestamp to form an archive label.
pub const LABEL_SUFFIX: &str = "_chamber";

/// `chrono` format of the timestamp part of an archive label.
pub const LABEL_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Extension of every service record inside an archive.
pub const ENTRY_EXTENSION: &str = ".json";

/// Extension of archives written without an explicit file name.
pub const ARCHIVE_EXTENSION: &str = "tgz";

/// Version reported for every secret; the filesystem store keeps no history.
pub const SECRET_VERSION: u32 = 1;
