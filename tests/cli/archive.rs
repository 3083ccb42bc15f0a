//! backup and restore through the CLI.

use crate::support::*;

#[test]
fn test_backup_prints_absolute_path() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    let output = t.backup("snap.tgz");
    assert_success(&output);

    let printed = stdout(&output);
    let path = std::path::Path::new(printed.trim_end());
    assert!(path.is_absolute());
    assert!(path.ends_with("snap.tgz"));
    assert!(t.path("snap.tgz").is_file());
}

#[test]
fn test_backup_default_name_is_label() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    let output = t.run(&["backup"]);
    assert_success(&output);

    let printed = stdout(&output);
    let name = std::path::Path::new(printed.trim_end())
        .file_name()
        .unwrap()
        .to_string_lossy()
        .to_string();
    assert!(name.ends_with("_chamber.tgz"), "got {}", name);
    assert_eq!(name.len(), "20240101_000000_chamber.tgz".len());
}

#[test]
fn test_backup_config_output_dir() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    std::fs::create_dir(t.path("backups")).unwrap();
    std::fs::write(
        t.path("local-chamber.toml"),
        "[backup]\noutput_dir = \"backups\"\n",
    )
    .unwrap();

    let output = t.run(&["backup", "-f", "snap.tgz"]);
    assert_success(&output);
    assert!(t.path("backups/snap.tgz").is_file());
}

#[test]
fn test_backup_missing_output_dir_fails() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    let output = t.run(&["backup", "-o", "nowhere"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nowhere");
}

#[test]
fn test_restore_replaces_store() {
    let t = Test::with_secrets(&[("a", "k", "1"), ("b/c", "k", "2")]);
    assert_success(&t.backup("snap.tgz"));

    t.put("a", "k", "changed");
    t.put("stale", "k", "x");

    let output = t.restore("snap.tgz", false);
    assert_success(&output);
    assert_stdout_contains(&output, "Restored 2 services from ");
    assert_eq!(t.secret("a", "k").as_deref(), Some("1"));
    assert!(t.secret("stale", "k").is_none());
}

#[test]
fn test_restore_patch_keeps_extra_secrets() {
    let t = Test::with_secrets(&[("a", "k", "1")]);
    assert_success(&t.backup("snap.tgz"));
    t.put("stale", "k", "x");

    let output = t.restore("snap.tgz", true);
    assert_success(&output);
    assert_eq!(t.secret("stale", "k").as_deref(), Some("x"));
}

#[test]
fn test_restore_without_tty_does_not_prompt() {
    let t = Test::with_secrets(&[("a", "k", "1")]);
    assert_success(&t.backup("snap.tgz"));

    let output = t.run(&["restore", "snap.tgz"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Restored 1 services from ");
}

#[test]
fn test_restore_rejects_traversal() {
    let t = Test::with_secrets(&[("a", "k", "keep")]);
    raw_archive(
        &t.path("evil.tgz"),
        &[
            ("20240101_000000_chamber/a.json", r#"{"k":"evil"}"#),
            ("../escaped.txt", "pwned"),
        ],
    );

    let output = t.restore("evil.tgz", false);
    assert_failure(&output);
    assert_stderr_contains(&output, "path traversal");
    assert!(!std::env::temp_dir().join("escaped.txt").exists());
    assert_eq!(t.secret("a", "k").as_deref(), Some("keep"));
}

#[test]
fn test_restore_missing_archive_fails() {
    let t = Test::new();
    assert_failure(&t.restore("missing.tgz", false));
}
