//! Tests for `authfile check`.

use crate::support::*;

#[test]
fn test_check_lists_machines_without_passwords() {
    let t = Test::new();
    t.write("creds.netrc", FULL_NETRC);

    let output = t.check("creds.netrc");
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("github.com"));
    assert!(out.contains("joker"));
    assert_never_printed(&output, "gotham");
    assert_never_printed(&output, "arkam");
}

#[test]
fn test_check_json() {
    let t = Test::new();
    t.write("creds.netrc", COMPACT_NETRC);

    let output = t
        .cmd()
        .args(["check", "creds.netrc", "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"machine": "github.com", "login": "batman"},
            {"machine": "gitlab.com", "login": "joker"}
        ])
    );
}

#[test]
fn test_check_reports_malformed_entry() {
    let t = Test::new();
    t.write(
        "bad.netrc",
        "machine github.com login batman password gotham\nmachine gitlab.com password arkam login joker\n",
    );

    let output = t.check("bad.netrc");
    assert_failure(&output);
    assert_stderr_contains(&output, "entry #2 at line 2");
    assert_never_printed(&output, "arkam");
}

#[cfg(unix)]
#[test]
fn test_check_warns_on_loose_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let path = t.write("creds.netrc", COMPACT_NETRC);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let output = t.check("creds.netrc");
    assert_success(&output);
    assert_stderr_contains(&output, "mode 644");
    assert_stderr_contains(&output, "chmod 600");
}

#[test]
fn test_check_empty_file_fails() {
    let t = Test::new();
    t.write("empty.netrc", "\n");

    let output = t.check("empty.netrc");
    assert_failure(&output);
    assert_stderr_contains(&output, "expected at least 1");
    assert!(stdout(&output).is_empty());
}
