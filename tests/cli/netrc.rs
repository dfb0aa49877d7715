//! Tests for `authfile netrc`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_login_from_env_to_stdout() {
    let t = Test::new();

    t.cmd()
        .env("GH_TOKEN", "gotham")
        .args(["netrc", "--login", "github.com", "batman", "env:GH_TOKEN"])
        .assert()
        .success()
        .stdout("machine github.com login batman password gotham\n");
}

#[test]
fn test_full_format_from_files() {
    let t = Test::new();
    t.write("pw1", "gotham\n");
    t.write("pw2", "arkam\n");

    let output = t.netrc(&[
        "--format",
        "full",
        "--login",
        "github.com",
        "batman",
        "file:pw1",
        "--login",
        "gitlab.com",
        "joker",
        "file:pw2",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{}\n", FULL_NETRC));
}

#[test]
fn test_files_ingested_before_logins() {
    let t = Test::new();
    t.write("base.netrc", "machine gitlab.com\nlogin joker\npassword arkam\n");

    let output = t
        .cmd()
        .env("GH_TOKEN", "gotham")
        .args([
            "netrc",
            "--login",
            "github.com",
            "batman",
            "env:GH_TOKEN",
            "--file",
            "base.netrc",
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "machine gitlab.com login joker password arkam\nmachine github.com login batman password gotham\n"
    );
}

#[test]
fn test_output_file_is_private() {
    let t = Test::new();

    t.cmd()
        .env("GH_TOKEN", "gotham")
        .args([
            "netrc",
            "--login",
            "github.com",
            "batman",
            "env:GH_TOKEN",
            "--output",
            ".netrc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrote auto-login file"));

    assert_eq!(
        t.read(".netrc"),
        "machine github.com login batman password gotham"
    );
    #[cfg(unix)]
    assert_eq!(t.mode(".netrc"), 0o600);
}

#[test]
fn test_secret_with_derived_name() {
    let t = Test::new();
    t.write("base.netrc", COMPACT_NETRC);

    let output = t.netrc(&["--file", "base.netrc", "--secret"]);
    assert_success(&output);

    let name = stdout(&output).trim().to_string();
    assert!(name.starts_with("netrc-"), "unexpected name {}", name);
    assert_eq!(name.len(), "netrc-".len() + 32);
    assert_eq!(t.read(&name), COMPACT_NETRC);

    // Same contents, same name.
    let again = t.netrc(&["--file", "base.netrc", "--secret"]);
    assert_eq!(stdout(&again).trim(), name);
}

#[test]
fn test_secret_with_explicit_name_and_dir() {
    let t = Test::new();
    t.write("base.netrc", COMPACT_NETRC);
    std::fs::create_dir(t.path("secrets")).unwrap();

    let output = t.netrc(&[
        "--file",
        "base.netrc",
        "--secret",
        "netrc-creds",
        "--secret-dir",
        "secrets",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "netrc-creds");
    assert_eq!(t.read("secrets/netrc-creds"), COMPACT_NETRC);
}

#[test]
fn test_password_never_logged() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("GH_TOKEN", "gotham")
        .args([
            "--verbose",
            "netrc",
            "--login",
            "github.com",
            "batman",
            "env:GH_TOKEN",
            "--output",
            ".netrc",
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_never_printed(&output, "gotham");
}

#[test]
fn test_prompt_reads_piped_stdin() {
    let t = Test::new();

    t.cmd()
        .args(["netrc", "--login", "github.com", "batman", "prompt"])
        .write_stdin("gotham\n")
        .assert()
        .success()
        .stdout("machine github.com login batman password gotham\n");
}

#[test]
fn test_username_from_env_handle() {
    let t = Test::new();

    t.cmd()
        .env("GH_USER", "batman")
        .env("GH_TOKEN", "gotham")
        .args(["netrc", "--login", "github.com", "env:GH_USER", "env:GH_TOKEN"])
        .assert()
        .success()
        .stdout("machine github.com login batman password gotham\n");
}

#[test]
fn test_username_and_password_prompted_in_order() {
    let t = Test::new();

    t.cmd()
        .args(["netrc", "--login", "github.com", "prompt", "prompt"])
        .write_stdin("batman\ngotham\n")
        .assert()
        .success()
        .stdout("machine github.com login batman password gotham\n");
}
