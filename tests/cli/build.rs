//! Tests for `authfile build`.

use crate::support::*;

#[test]
fn test_build_manifest() {
    let t = Test::new();
    t.write("base.netrc", "machine gitlab.com login joker password arkam\n");
    for (i, (_, _, pass)) in REGISTRIES.iter().enumerate() {
        t.write(&format!("pw{}", i), pass);
    }
    t.write(
        "authfile.toml",
        r#"
[netrc]
format = "full"
include = ["base.netrc"]
output = ".netrc"

[[netrc.login]]
machine = "github.com"
username = "batman"
password = "env:GH_TOKEN"

[registry]
output = "config.json"
secret = "oci-login"

[[registry.auth]]
hostname = "quay.io"
username = "penguin"
password = "file:pw2"

[[registry.auth]]
hostname = "docker.io"
username = "batman"
password = "file:pw0"

[[registry.auth]]
hostname = "ghcr.io"
username = "joker"
password = "file:pw1"
"#,
    );

    let output = t.cmd().env("GH_TOKEN", "gotham").arg("build").output().unwrap();
    assert_success(&output);

    assert_eq!(
        t.read(".netrc"),
        "machine gitlab.com\nlogin joker\npassword arkam\nmachine github.com\nlogin batman\npassword gotham"
    );
    assert_eq!(t.read("config.json"), REGISTRY_JSON);
    assert_eq!(t.read("oci-login"), REGISTRY_JSON);
    assert_eq!(stdout(&output).trim(), "oci-login");
}

#[test]
fn test_build_custom_manifest_path() {
    let t = Test::new();
    std::fs::create_dir(t.path("ci")).unwrap();
    t.write("ci/pw", "gotham");
    t.write(
        "ci/creds.toml",
        r#"
[netrc]
output = "out.netrc"

[[netrc.login]]
machine = "github.com"
username = "batman"
password = "file:pw"
"#,
    );

    let output = t
        .cmd()
        .args(["build", "--manifest", "ci/creds.toml"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(
        t.read("ci/out.netrc"),
        "machine github.com login batman password gotham"
    );
}

#[test]
fn test_build_without_manifest() {
    let t = Test::new();

    let output = t.build();
    assert_failure(&output);
    assert_stderr_contains(&output, "manifest not found");
    assert_stderr_contains(&output, "--manifest");
}
