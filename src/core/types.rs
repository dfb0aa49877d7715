//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A remote machine name in an auto-login file (e.g., github.com).
pub type Machine = String;

/// A registry hostname or namespace (e.g., docker.io, quay.io/user/image).
pub type Hostname = String;

/// A user name on a remote machine or registry.
pub type Username = String;

/// A base64-encoded `username:password` registry credential.
pub type EncodedAuth = String;

/// The name a materialized secret is published under.
pub type SecretName = String;
