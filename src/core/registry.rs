//! OCI registry authentication file.
//!
//! Builds the `{"auths": {...}}` document understood by container tooling
//! (see containers-auth.json(5)). Each hostname maps to a base64-encoded
//! `username:password` credential; writing the same hostname twice keeps the
//! later credential.

use std::collections::BTreeMap;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::{debug, info};
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants::{REGISTRY_FILE_MODE, REGISTRY_PREFIX};
use crate::core::materialize::{self, NamedSecret};
use crate::core::secret::Secret;
use crate::core::types::{EncodedAuth, Hostname};
use crate::core::validation;
use crate::error::Result;

/// Registry credentials keyed by hostname.
///
/// Keys are serialized in sorted order so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerAuth {
    auths: BTreeMap<Hostname, Auth>,
}

/// A single base64-encoded registry credential.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Auth {
    auth: EncodedAuth,
}

impl Auth {
    fn encode(username: &str, password: &str) -> Self {
        let credential = Zeroizing::new(format!("{}:{}", username, password));
        Self {
            auth: STANDARD.encode(credential.as_bytes()),
        }
    }

    /// Encoded `username:password`
    pub fn encoded(&self) -> &str {
        &self.auth
    }
}

impl Drop for Auth {
    fn drop(&mut self) {
        self.auth.zeroize();
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Auth(<redacted>)")
    }
}

/// Builder for registry authentication files.
///
/// # Example
///
/// ```
/// use authfile::core::registry::OciLogin;
/// use authfile::core::secret::Plaintext;
///
/// let login = OciLogin::new()
///     .with_auth("docker.io", "batman", &Plaintext::new("c8H96YDRENibMQ=="))
///     .unwrap();
///
/// assert_eq!(
///     login.as_config().unwrap().as_str(),
///     r#"{"auths":{"docker.io":{"auth":"YmF0bWFuOmM4SDk2WURSRU5pYk1RPT0="}}}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OciLogin {
    config: ContainerAuth,
}

impl OciLogin {
    /// Start with no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hostnames with a credential, in sorted order
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.config.auths.keys().map(String::as_str)
    }

    /// Encoded credential for `hostname`, if any
    pub fn auth(&self, hostname: &str) -> Option<&str> {
        self.config.auths.get(hostname).map(Auth::encoded)
    }

    /// Number of configured registries
    pub fn len(&self) -> usize {
        self.config.auths.len()
    }

    /// Whether no registry is configured
    pub fn is_empty(&self) -> bool {
        self.config.auths.is_empty()
    }

    /// Set the credential for `hostname`, replacing any earlier one.
    ///
    /// # Arguments
    ///
    /// * `hostname` - Registry hostname (docker.io) or namespace (quay.io/user/image)
    /// * `username` - User to authenticate as
    /// * `password` - Handle for the user's password
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty or whitespace hostname, or a
    /// user name that is empty or contains `:`; `SecretError` if the handle
    /// cannot be resolved.
    pub fn with_auth<S>(&self, hostname: &str, username: &str, password: &S) -> Result<Self>
    where
        S: Secret + ?Sized,
    {
        validation::validate_token("hostname", hostname)?;
        validation::validate_registry_username(username)?;

        let plaintext = password.plaintext()?;
        validation::validate_required("password", &plaintext)?;
        debug!(hostname, source = password.kind(), "resolved registry password");

        let mut next = self.clone();
        let replaced = next
            .config
            .auths
            .insert(hostname.to_string(), Auth::encode(username, &plaintext))
            .is_some();

        info!(hostname, replaced, "configured registry auth");
        Ok(next)
    }

    /// Rendered JSON document.
    ///
    /// An empty builder renders as `{"auths":{}}`.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if serialization fails.
    pub fn as_config(&self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(serde_json::to_string(&self.config)?))
    }

    /// Write the rendered JSON to `path` with mode 0644.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn as_file(&self, path: impl AsRef<Path>) -> Result<()> {
        materialize::write_file(path.as_ref(), &self.as_config()?, REGISTRY_FILE_MODE)
    }

    /// Wrap the rendered JSON as a named secret.
    ///
    /// Without a name, the secret is called `oci-config-<digest>`.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if serialization fails.
    pub fn as_secret(&self, name: Option<&str>) -> Result<NamedSecret> {
        Ok(NamedSecret::new(REGISTRY_PREFIX, name, self.as_config()?))
    }
}
