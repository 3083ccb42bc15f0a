//! Secret management: write, read, delete, list, list-services, find.

use crate::support::*;

#[test]
fn test_write_and_read_roundtrip() {
    let t = Test::new();
    assert_roundtrip(&t, "db/prod", "password", "hunter2");
    assert_eq!(t.secret("db/prod", "password").as_deref(), Some("hunter2"));
}

#[test]
fn test_write_value_from_stdin() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["write", "app", "token", "-"])
        .write_stdin("from-stdin\n")
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.read("app", "token");
    assert_eq!(stdout(&output).trim_end(), "from-stdin");
}

#[test]
fn test_read_table() {
    let t = Test::with_secrets(&[("app", "token", "abc")]);
    let output = t.run(&["read", "app", "token"]);
    assert_success(&output);

    let out = stdout(&output);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Key\tValue\tVersion\tLastModified\tUser"));
    let row: Vec<&str> = lines.next().unwrap().split('\t').collect();
    assert_eq!(&row[..3], &["token", "abc", "1"]);
    assert_eq!(row[3].len(), "2024-01-01 00:00:00".len());
}

#[test]
fn test_read_missing_key_fails() {
    let t = Test::new();
    let output = t.read("app", "missing");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing");
}

#[test]
fn test_delete_removes_secret() {
    let t = Test::with_secrets(&[("app", "token", "abc"), ("app", "user", "bob")]);
    assert_success(&t.run(&["delete", "app", "token"]));

    assert!(t.secret("app", "token").is_none());
    assert_eq!(t.secret("app", "user").as_deref(), Some("bob"));
}

#[test]
fn test_delete_missing_fails() {
    let t = Test::new();
    assert_failure(&t.run(&["delete", "app", "token"]));
}

#[test]
fn test_list_shows_keys_sorted() {
    let t = Test::with_secrets(&[("app", "b", "2"), ("app", "a", "1")]);
    let output = t.run(&["list", "app"]);
    assert_success(&output);

    let out = stdout(&output);
    let keys: Vec<&str> = out
        .lines()
        .skip(1)
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert!(out.starts_with("Key\tVersion\tLastModified\tUser"));
    assert_eq!(keys, vec!["a", "b"]);
    assert_stdout_excludes(&output, "\t2\t");
}

#[test]
fn test_list_services_skips_readme() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    std::fs::write(t.secrets_dir().join("README.md"), "docs").unwrap();

    let output = t.list_services();
    assert_success(&output);
    assert_eq!(stdout(&output), "api\ndb/dev\ndb/prod\n");
}

#[test]
fn test_find_by_key() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    let output = t.run(&["find", "password"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Service\ndb/dev\ndb/prod\n");
}

#[test]
fn test_find_by_value() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    let output = t.run(&["find", "-v", "s3cr3t"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Service\tKey\ndb/prod\tpassword\n");
}

#[test]
fn test_secrets_dir_flag_overrides_env() {
    let t = Test::new();
    let other = t.path("other");
    std::fs::create_dir(&other).unwrap();

    let output = t
        .cmd()
        .args(["-s", other.to_str().unwrap(), "write", "app", "k", "v"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(other.join("app").join("k").is_file());
    assert!(t.secret("app", "k").is_none());
}

#[test]
fn test_config_file_sets_secrets_dir() {
    let t = Test::new();
    std::fs::create_dir(t.path("vault")).unwrap();
    std::fs::write(t.path("local-chamber.toml"), "secrets_dir = \"vault\"\n").unwrap();

    let output = t
        .cmd()
        .env_remove("SECRETS_DIR")
        .args(["write", "app", "k", "v"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("vault/app/k").is_file());
}
