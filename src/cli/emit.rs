//! Artifact destinations shared by the build commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::materialize::NamedSecret;
use crate::core::netrc::Netrc;
use crate::core::registry::OciLogin;
use crate::core::validation;
use crate::error::Result;

/// A rendered credential file that can be written out or published.
pub trait Artifact {
    /// Human-readable artifact name for status lines
    fn label(&self) -> &'static str;

    fn render(&self) -> Result<Zeroizing<String>>;

    fn write(&self, path: &Path) -> Result<()>;

    fn materialize(&self, name: Option<&str>) -> Result<NamedSecret>;
}

impl Artifact for Netrc {
    fn label(&self) -> &'static str {
        "auto-login file"
    }

    fn render(&self) -> Result<Zeroizing<String>> {
        Ok(self.contents())
    }

    fn write(&self, path: &Path) -> Result<()> {
        self.as_file(path)
    }

    fn materialize(&self, name: Option<&str>) -> Result<NamedSecret> {
        Ok(self.as_secret(name))
    }
}

impl Artifact for OciLogin {
    fn label(&self) -> &'static str {
        "registry config"
    }

    fn render(&self) -> Result<Zeroizing<String>> {
        self.as_config()
    }

    fn write(&self, path: &Path) -> Result<()> {
        self.as_file(path)
    }

    fn materialize(&self, name: Option<&str>) -> Result<NamedSecret> {
        self.as_secret(name)
    }
}

/// Where an artifact goes.
///
/// With neither a file nor a secret requested, the artifact is printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destination {
    pub output: Option<PathBuf>,
    /// `Some(None)` publishes under the derived name
    pub secret: Option<Option<String>>,
    pub secret_dir: PathBuf,
}

impl Destination {
    /// Send `artifact` to every requested destination.
    ///
    /// The secret name is printed on stdout so callers can capture it.
    pub fn emit<A: Artifact>(&self, artifact: &A) -> Result<()> {
        if self.output.is_none() && self.secret.is_none() {
            let rendered = artifact.render()?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered.as_str())?;
            return Ok(());
        }

        // Name the secret before touching disk so a bad name writes nothing.
        let secret = match &self.secret {
            Some(name) => {
                let secret = artifact.materialize(name.as_deref())?;
                validation::validate_secret_name(secret.name())?;
                Some(secret)
            }
            None => None,
        };

        if let Some(path) = &self.output {
            artifact.write(path)?;
            output::success(&format!("wrote {} to {}", artifact.label(), output::path(path)));
        }

        if let Some(secret) = secret {
            let path = secret.write_to(&self.secret_dir)?;
            output::success(&format!(
                "materialized {} as {}",
                artifact.label(),
                output::name(secret.name())
            ));
            output::kv("path", output::path(&path));
            println!("{}", secret.name());
        }

        Ok(())
    }
}
