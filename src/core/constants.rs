//! Constants used throughout authfile.
//!
//! Centralizes magic strings and configuration values.

/// Default build manifest file name.
pub const MANIFEST_FILE: &str = "authfile.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "AUTHFILE_LOG";

/// Prefix for derived auto-login secret names (`netrc-<digest>`).
pub const NETRC_PREFIX: &str = "netrc";

/// Prefix for derived registry secret names (`oci-config-<digest>`).
pub const REGISTRY_PREFIX: &str = "oci-config";

/// Number of digest bytes kept for derived secret names.
pub const DIGEST_BYTES: usize = 16;

/// Permissions for rendered auto-login files.
pub const NETRC_FILE_MODE: u32 = 0o600;

/// Permissions for rendered registry auth files.
pub const REGISTRY_FILE_MODE: u32 = 0o644;

/// Permissions for materialized secret files.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Keywords of an auto-login entry, in the order they must appear.
pub const MACHINE_KEYWORD: &str = "machine";
pub const LOGIN_KEYWORD: &str = "login";
pub const PASSWORD_KEYWORD: &str = "password";
