//! Build manifest (`authfile.toml`).
//!
//! Declares the auto-login and registry artifacts to build in one pass.
//! Passwords are always secret handles (`env:NAME`, `file:PATH`, `prompt`),
//! never literal values. Auto-login user names may be handles too.
//!
//! ```toml
//! [netrc]
//! format = "full"
//! include = ["base.netrc"]
//! output = ".netrc"
//!
//! [[netrc.login]]
//! machine = "github.com"
//! username = "batman"
//! password = "env:GITHUB_TOKEN"
//!
//! [registry]
//! output = "config.json"
//!
//! [[registry.auth]]
//! hostname = "docker.io"
//! username = "batman"
//! password = "file:/run/secrets/docker"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::domain::Format;
use crate::core::netrc::Netrc;
use crate::core::registry::OciLogin;
use crate::core::secret::{FileSecret, SecretRef, ValueRef};
use crate::error::{ManifestError, Result};

/// Parsed build manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Auto-login file to build
    #[serde(default)]
    pub netrc: Option<NetrcSection>,
    /// Registry auth file to build
    #[serde(default)]
    pub registry: Option<RegistrySection>,
    /// Directory relative paths resolve against
    #[serde(skip)]
    base: PathBuf,
}

/// Where a built artifact goes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outputs {
    /// File to write the rendered artifact to
    pub output: Option<PathBuf>,
    /// Secret name to publish under; an empty string derives the name
    pub secret: Option<String>,
    /// Directory secret files are written to (defaults to the manifest directory)
    pub secret_dir: Option<PathBuf>,
}

/// `[netrc]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetrcSection {
    #[serde(default)]
    pub format: Format,
    /// Existing auto-login files ingested before any login
    #[serde(default)]
    pub include: Vec<PathBuf>,
    #[serde(default, rename = "login")]
    pub logins: Vec<LoginEntry>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub secret_dir: Option<PathBuf>,
}

impl NetrcSection {
    /// Destinations declared for the auto-login file
    pub fn outputs(&self) -> Outputs {
        Outputs {
            output: self.output.clone(),
            secret: self.secret.clone(),
            secret_dir: self.secret_dir.clone(),
        }
    }
}

/// `[[netrc.login]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginEntry {
    pub machine: String,
    pub username: String,
    pub password: String,
}

/// `[registry]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    #[serde(default, rename = "auth")]
    pub auths: Vec<AuthEntry>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub secret_dir: Option<PathBuf>,
}

impl RegistrySection {
    /// Destinations declared for the registry config
    pub fn outputs(&self) -> Outputs {
        Outputs {
            output: self.output.clone(),
            secret: self.secret.clone(),
            secret_dir: self.secret_dir.clone(),
        }
    }
}

/// `[[registry.auth]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthEntry {
    pub hostname: String,
    pub username: String,
    pub password: String,
}

impl Manifest {
    /// Load a manifest from `path`.
    ///
    /// Relative paths inside the manifest resolve against its directory.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotFound` if the file doesn't exist,
    /// `ManifestError::Parse` if the TOML is malformed, or
    /// `ManifestError::Empty` if it declares nothing to build.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading manifest");

        if !path.exists() {
            return Err(ManifestError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ManifestError::ReadFile)?;

        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::parse(&contents, base)
    }

    /// Parse manifest text, resolving relative paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Parse` or `ManifestError::Empty`.
    pub fn parse(contents: &str, base: impl Into<PathBuf>) -> Result<Self> {
        let mut manifest: Self = toml::from_str(contents).map_err(ManifestError::Parse)?;
        if manifest.netrc.is_none() && manifest.registry.is_none() {
            return Err(ManifestError::Empty.into());
        }

        manifest.base = base.into();
        debug!(
            netrc = manifest.netrc.is_some(),
            registry = manifest.registry.is_some(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Resolve `path` against the manifest directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base.join(path)
    }

    /// Directory secrets are written to for `outputs`.
    pub fn secret_dir(&self, outputs: &Outputs) -> PathBuf {
        match &outputs.secret_dir {
            Some(dir) => self.resolve(dir),
            None => self.base.clone(),
        }
    }

    /// Build the auto-login configuration, if the manifest declares one.
    ///
    /// Included files are ingested first, then logins are added in order.
    ///
    /// # Errors
    ///
    /// Returns the first include, parse, handle or validation failure.
    pub fn build_netrc(&self) -> Result<Option<Netrc>> {
        let Some(section) = &self.netrc else {
            return Ok(None);
        };

        let mut netrc = Netrc::new(section.format);
        for include in &section.include {
            netrc = netrc.with_file_path(self.resolve(include))?;
        }
        for entry in &section.logins {
            let username = match entry.username.parse::<ValueRef>()? {
                ValueRef::Handle(handle) => ValueRef::Handle(self.resolve_handle(handle)),
                literal => literal,
            };
            let username = username.labelled(format!("Username for {}", entry.machine));
            let password = self.secret_ref(&entry.password)?;
            let password = password.labelled(format!("Password for {}", entry.machine));
            netrc = netrc.with_login_secret(&entry.machine, &username, &password)?;
        }

        Ok(Some(netrc))
    }

    /// Build the registry configuration, if the manifest declares one.
    ///
    /// # Errors
    ///
    /// Returns the first handle or validation failure.
    pub fn build_registry(&self) -> Result<Option<OciLogin>> {
        let Some(section) = &self.registry else {
            return Ok(None);
        };

        let mut login = OciLogin::new();
        for entry in &section.auths {
            let password = self.secret_ref(&entry.password)?;
            let password = password.labelled(format!("Password for {}", entry.hostname));
            login = login.with_auth(&entry.hostname, &entry.username, &password)?;
        }

        Ok(Some(login))
    }

    /// Parse a handle, resolving relative `file:` paths against the manifest.
    fn secret_ref(&self, handle: &str) -> Result<SecretRef> {
        Ok(self.resolve_handle(handle.parse()?))
    }

    fn resolve_handle(&self, handle: SecretRef) -> SecretRef {
        match handle {
            SecretRef::File(file) => SecretRef::File(FileSecret::new(self.resolve(file.path()))),
            other => other,
        }
    }
}
