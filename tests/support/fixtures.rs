//! Test fixtures and constants.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

/// Standard store used across multiple tests as `(service, key, value)`.
pub const STANDARD_SECRETS: &[(&str, &str, &str)] = &[
    ("db/prod", "password", "s3cr3t"),
    ("db/prod", "user", "admin"),
    ("db/dev", "password", "dev"),
    ("api", "token", "sk-test-12345"),
];

/// Sample YAML mapping for import tests.
pub const SAMPLE_YAML: &str = "url: postgres://localhost/mydb\nuser: app\n";

/// Sample JSON mapping for import tests.
pub const SAMPLE_JSON: &str = r#"{"url": "postgres://localhost/mydb", "user": "app"}"#;

/// Write a tar.gz at `path` holding one file per `(entry name, contents)`.
///
/// Names are written into the header verbatim, so hostile paths such as
/// `../evil` survive; the `tar` builder would reject them.
pub fn raw_archive(path: &Path, entries: &[(&str, &str)]) -> PathBuf {
    let file = File::create(path).expect("failed to create archive");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for (name, contents) in entries {
        let mut header = tar::Header::new_gnu();
        let gnu = header.as_gnu_mut().expect("gnu header");
        gnu.name[..name.len()].copy_from_slice(name.as_bytes());
        header.set_entry_type(tar::EntryType::Regular);
        header.set_mode(0o644);
        header.set_size(contents.len() as u64);
        header.set_cksum();
        builder
            .append(&header, contents.as_bytes())
            .expect("failed to append entry");
    }
    builder
        .into_inner()
        .and_then(|gz| gz.finish())
        .expect("failed to finish archive");
    path.to_path_buf()
}
