//! Error reporting tests.

use crate::support::*;

#[test]
fn test_missing_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_remove("AUTHFILE_TEST_UNSET")
        .args([
            "netrc",
            "--login",
            "github.com",
            "batman",
            "env:AUTHFILE_TEST_UNSET",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "AUTHFILE_TEST_UNSET");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_literal_password_rejected() {
    let t = Test::new();

    let output = t.netrc(&["--login", "github.com", "batman", "gotham"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid secret reference");
}

#[test]
fn test_unknown_format() {
    let t = Test::new();

    let output = t.netrc(&["--format", "yaml"]);
    assert_failure(&output);
}

#[test]
fn test_password_with_whitespace_rejected() {
    let t = Test::new();
    t.write("pw", "two words");

    let output = t.netrc(&["--login", "github.com", "batman", "file:pw"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "password cannot contain whitespace");
    assert_never_printed(&output, "two words");
}

#[test]
fn test_registry_username_with_colon() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("PW", "x")
        .args(["registry", "--auth", "docker.io", "bat:man", "env:PW"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "username cannot contain ':'");
}

#[test]
fn test_malformed_include_writes_nothing() {
    let t = Test::new();
    t.write("bad.netrc", "machine github.com login batman\n");

    let output = t.netrc(&["--file", "bad.netrc", "--output", ".netrc"]);
    assert_failure(&output);
    assert!(!t.path(".netrc").exists());
}

#[test]
fn test_invalid_secret_name_leaves_no_output_file() {
    let t = Test::new();
    t.write("base.netrc", COMPACT_NETRC);

    let output = t.netrc(&[
        "--file",
        "base.netrc",
        "--output",
        ".netrc",
        "--secret",
        "a/b",
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "secret name cannot contain '/'");
    assert!(!t.path(".netrc").exists());
}
