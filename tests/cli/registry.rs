//! Tests for `authfile registry`.

use crate::support::*;
use predicates::prelude::*;

fn auth_args(t: &Test) -> Vec<String> {
    let mut args = Vec::new();
    for (i, (host, user, pass)) in REGISTRIES.iter().enumerate() {
        let file = format!("pw{}", i);
        t.write(&file, pass);
        args.extend([
            "--auth".to_string(),
            host.to_string(),
            user.to_string(),
            format!("file:{}", file),
        ]);
    }
    args
}

#[test]
fn test_registry_to_stdout() {
    let t = Test::new();
    let args = auth_args(&t);

    t.cmd()
        .arg("registry")
        .args(&args)
        .assert()
        .success()
        .stdout(format!("{}\n", REGISTRY_JSON));
}

#[test]
fn test_empty_registry() {
    let t = Test::new();

    t.cmd()
        .arg("registry")
        .assert()
        .success()
        .stdout("{\"auths\":{}}\n");
}

#[test]
fn test_registry_output_file_mode() {
    let t = Test::new();
    let mut args = auth_args(&t);
    args.extend(["--output".to_string(), "config.json".to_string()]);

    t.cmd().arg("registry").args(&args).assert().success();

    assert_eq!(t.read("config.json"), REGISTRY_JSON);
    #[cfg(unix)]
    assert_eq!(t.mode("config.json"), 0o644);
}

#[test]
fn test_registry_secret() {
    let t = Test::new();
    let mut args = auth_args(&t);
    args.extend(["--secret".to_string(), "oci-login".to_string()]);

    t.cmd()
        .arg("registry")
        .args(&args)
        .assert()
        .success()
        .stdout("oci-login\n");

    assert_eq!(t.read("oci-login"), REGISTRY_JSON);
    #[cfg(unix)]
    assert_eq!(t.mode("oci-login"), 0o600);
}

#[test]
fn test_later_auth_wins() {
    let t = Test::new();

    t.cmd()
        .env("P1", "first")
        .env("P2", "second")
        .args([
            "registry", "--auth", "docker.io", "u1", "env:P1", "--auth", "docker.io", "u2",
            "env:P2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("dTI6c2Vjb25k"))
        .stdout(predicate::str::contains("dTE6Zmlyc3Q").not());
}
