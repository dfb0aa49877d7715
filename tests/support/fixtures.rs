//! Test fixtures and constants.

/// A compact auto-login file with two entries.
pub const COMPACT_NETRC: &str = "machine github.com login batman password gotham
machine gitlab.com login joker password arkam";

/// The same entries in the full layout.
pub const FULL_NETRC: &str = "machine github.com
login batman
password gotham
machine gitlab.com
login joker
password arkam";

/// Registry document for the three standard credentials.
pub const REGISTRY_JSON: &str = r#"{"auths":{"docker.io":{"auth":"YmF0bWFuOmM4SDk2WURSRU5pYk1RPT0="},"ghcr.io":{"auth":"am9rZXI6NlZYek9leWdCOEtyc1E9PQ=="},"quay.io":{"auth":"cGVuZ3VpbjpYT3MxY0Rqa1pUSENQQT09"}}}"#;

/// Registry credentials as (hostname, username, password).
pub const REGISTRIES: &[(&str, &str, &str)] = &[
    ("docker.io", "batman", "c8H96YDRENibMQ=="),
    ("ghcr.io", "joker", "6VXzOeygB8KrsQ=="),
    ("quay.io", "penguin", "XOs1cDjkZTHCPA=="),
];
