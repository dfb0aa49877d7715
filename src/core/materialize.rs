//! Secret materialization.
//!
//! Wraps rendered artifact text as a named secret, deriving the name from a
//! digest of the exact bytes when none is supplied, and writes artifacts to
//! disk with restricted permissions.

use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{DIGEST_BYTES, SECRET_FILE_MODE};
use crate::core::secret::Secret;
use crate::core::types::SecretName;
use crate::core::validation;
use crate::error::Result;

/// Hex digest of `contents`, truncated to [`DIGEST_BYTES`] bytes.
pub fn content_digest(contents: &str) -> String {
    Sha256::digest(contents.as_bytes())[..DIGEST_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Content-addressed name: `<prefix>-<hex digest>`.
///
/// Identical contents always produce identical names.
pub fn derive_name(prefix: &str, contents: &str) -> SecretName {
    format!("{}-{}", prefix, content_digest(contents))
}

/// Rendered artifact published under a name.
///
/// A named secret is itself a [`Secret`], so it can be handed to anything
/// that accepts a secret handle.
#[derive(Clone, PartialEq, Eq)]
pub struct NamedSecret {
    name: SecretName,
    contents: Zeroizing<String>,
}

impl NamedSecret {
    /// Wrap `contents`, using `name` verbatim when given and non-empty,
    /// otherwise deriving it from `prefix` and the content digest.
    pub fn new(prefix: &str, name: Option<&str>, contents: Zeroizing<String>) -> Self {
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => derive_name(prefix, &contents),
        };
        debug!(name = %name, "materialized secret");

        Self { name, contents }
    }

    /// Name the secret is published under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered artifact text
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Write the contents to `<dir>/<name>` with mode 0600.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name cannot be used as a file name,
    /// or an IO error if the file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        validation::validate_secret_name(&self.name)?;

        let path = dir.as_ref().join(&self.name);
        write_file(&path, &self.contents, SECRET_FILE_MODE)?;
        Ok(path)
    }
}

impl Secret for NamedSecret {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        Ok(self.contents.clone())
    }

    fn kind(&self) -> &'static str {
        "named"
    }
}

impl std::fmt::Debug for NamedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedSecret")
            .field("name", &self.name)
            .field("contents", &"<redacted>")
            .finish()
    }
}

/// Write `contents` to `path`, creating or truncating it, with `mode` on Unix.
///
/// Permissions are reapplied after writing so an existing file with looser
/// permissions is tightened too.
///
/// # Errors
///
/// Returns an IO error if the file cannot be written.
pub fn write_file(path: &Path, contents: &str, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(mode)
            .open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
    }

    #[cfg(not(unix))]
    {
        let _ = mode;
        let mut file = std::fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
    }

    debug!(path = %path.display(), mode = %format!("{:o}", mode), "wrote artifact");
    Ok(())
}
