//! Archive layout: the label directory and entry names.
//!
//! ```text
//! 20240131_093000_chamber/
//! ├── db.dev.json
//! └── db.prod.json
//! ```

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::core::constants::{ENTRY_EXTENSION, LABEL_SUFFIX, LABEL_TIMESTAMP_FORMAT};

/// Name of the single top-level directory inside an archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Label for the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// Label for a given instant, at second resolution.
    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(format!(
            "{}{}",
            time.format(LABEL_TIMESTAMP_FORMAT),
            LABEL_SUFFIX
        ))
    }

    /// Parse a directory name as a label.
    ///
    /// Returns `None` unless the name is `<YYYYMMDD_HHMMSS>_chamber`.
    pub fn parse(name: &str) -> Option<Self> {
        let timestamp = name.strip_suffix(LABEL_SUFFIX)?;
        NaiveDateTime::parse_from_str(timestamp, LABEL_TIMESTAMP_FORMAT).ok()?;
        Some(Self(name.to_string()))
    }

    /// The label as a directory name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Archive entry name of a service: `db/prod` becomes `db.prod.json`.
pub fn entry_name(service: &str) -> String {
    format!("{}{}", service.replace('/', "."), ENTRY_EXTENSION)
}

/// Service name of an archive entry: `db.prod.json` becomes `db/prod`.
///
/// Returns `None` for files without the `.json` extension.
pub fn service_name(entry: &str) -> Option<String> {
    entry
        .strip_suffix(ENTRY_EXTENSION)
        .filter(|stem| !stem.is_empty())
        .map(|stem| stem.replace('.', "/"))
}
