//! env, export and import.

use crate::support::*;

#[test]
fn test_env_quotes_values_with_spaces() {
    let t = Test::with_secrets(&[("app", "greeting", "hello world"), ("app", "user", "bob")]);
    let output = t.run(&["env", "app"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "export GREETING=\"hello world\"\nexport USER=bob\n"
    );
}

#[test]
fn test_export_json_default() {
    let t = Test::with_secrets(&[("app", "b", "2"), ("app", "a", "1")]);
    let output = t.run(&["export", "app"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "{\"a\":\"1\",\"b\":\"2\"}\n");
}

#[test]
fn test_export_formats() {
    let t = Test::with_secrets(&[("app", "user", "bob")]);
    let cases = [
        ("yaml", "user: bob\n"),
        ("csv", "user,bob\n"),
        ("tsv", "user\tbob\n"),
        ("dotenv", "USER=\"bob\"\n"),
        ("tfvars", "user = \"bob\"\n"),
    ];
    for (format, expected) in cases {
        let output = t.run(&["export", "-f", format, "app"]);
        assert_success(&output);
        assert_eq!(stdout(&output), expected, "format {}", format);
    }
}

#[test]
fn test_export_to_file() {
    let t = Test::with_secrets(&[("app", "user", "bob")]);
    let output = t.run(&["export", "-o", "out.json", "app"]);
    assert_success(&output);
    assert_stdout_excludes(&output, "bob");
    assert_eq!(
        std::fs::read_to_string(t.path("out.json")).unwrap(),
        "{\"user\":\"bob\"}\n"
    );
}

#[test]
fn test_export_rejects_unknown_format() {
    let t = Test::with_secrets(&[("app", "user", "bob")]);
    assert_failure(&t.run(&["export", "-f", "xml", "app"]));
}

#[test]
fn test_import_json_file() {
    let t = Test::new();
    std::fs::write(t.path("in.json"), SAMPLE_JSON).unwrap();

    let output = t.run(&["import", "db", "in.json"]);
    assert_success(&output);
    assert_eq!(t.secret("db", "user").as_deref(), Some("app"));
    assert_eq!(
        t.secret("db", "url").as_deref(),
        Some("postgres://localhost/mydb")
    );
}

#[test]
fn test_import_yaml_from_stdin() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["import", "db"])
        .write_stdin(SAMPLE_YAML)
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.secret("db", "user").as_deref(), Some("app"));
}

#[test]
fn test_import_rejects_garbage() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["import", "db", "-"])
        .write_stdin("- not\n- a mapping\n")
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(t.secret("db", "user").is_none());
}
