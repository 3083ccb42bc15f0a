//! Error reporting.

use crate::support::*;

#[test]
fn test_missing_secrets_dir_hint() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["-s", "does-not-exist", "list-services"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "does-not-exist");
    assert_stderr_contains(&output, "--secrets-dir");
}

#[test]
fn test_invalid_service_name_rejected() {
    let t = Test::new();
    let output = t.write("../outside", "k", "v");
    assert_failure(&output);
    assert!(!t.dir.path().join("outside").exists());
}

#[test]
fn test_malformed_config_reported() {
    let t = Test::new();
    std::fs::write(t.path("local-chamber.toml"), "secrets_dir = [").unwrap();
    let output = t.list_services();
    assert_failure(&output);
    assert_stderr_contains(&output, "config");
}

#[test]
fn test_debug_flag_prints_error_details() {
    let t = Test::new();
    let output = t.run(&["--debug", "read", "-q", "app", "missing"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "KeyNotFound");
}

#[test]
fn test_completions_generate() {
    let t = Test::new();
    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "local-chamber");
}

#[test]
fn test_completions_cover_subcommands() {
    let t = Test::new();
    for shell in ["zsh", "fish"] {
        let output = t.run(&["completions", shell]);
        assert_success(&output);
        assert_stdout_contains(&output, "restore");
        assert_stdout_contains(&output, "list-services");
    }
}
