//! Auto-login (`.netrc`) configuration.
//!
//! [`Netrc`] accumulates login records from secret handles and existing
//! files, then renders them as a `.netrc` file or a named secret. Every
//! builder call returns a new instance, so an earlier instance stays usable
//! as a branch point and a failed call never leaves a half-updated value.

use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::constants::{NETRC_FILE_MODE, NETRC_PREFIX};
use crate::core::domain::{Format, LoginRecord};
use crate::core::grammar;
use crate::core::materialize::{self, NamedSecret};
use crate::core::secret::{Plaintext, Secret};
use crate::core::validation;
use crate::error::Result;

/// Ordered login records plus the layout used to render them.
///
/// Records keep append order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoLogin {
    logins: Vec<LoginRecord>,
    format: Format,
}

impl AutoLogin {
    /// Empty configuration rendered in `format`
    pub fn new(format: Format) -> Self {
        Self {
            logins: Vec::new(),
            format,
        }
    }

    /// Records in append order
    pub fn logins(&self) -> &[LoginRecord] {
        &self.logins
    }

    /// Rendering layout
    pub fn format(&self) -> Format {
        self.format
    }

    /// Render every record, trimming the final line ending.
    ///
    /// An empty configuration renders as an empty string.
    pub fn render(&self) -> Zeroizing<String> {
        let mut buf = Zeroizing::new(String::new());
        for login in &self.logins {
            buf.push_str(&Zeroizing::new(self.format.render(login)));
        }

        let trimmed = buf.trim_end().len();
        buf.truncate(trimmed);
        buf
    }
}

/// Builder for auto-login configuration files.
///
/// # Example
///
/// ```
/// use authfile::core::domain::Format;
/// use authfile::core::netrc::Netrc;
/// use authfile::core::secret::Plaintext;
///
/// let netrc = Netrc::new(Format::Compact)
///     .with_login("github.com", "batman", &Plaintext::new("gotham"))
///     .unwrap();
///
/// assert_eq!(
///     netrc.contents().as_str(),
///     "machine github.com login batman password gotham"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netrc {
    config: AutoLogin,
}

impl Netrc {
    /// Start an empty configuration rendered in `format`.
    pub fn new(format: Format) -> Self {
        Self {
            config: AutoLogin::new(format),
        }
    }

    /// Records accumulated so far
    pub fn logins(&self) -> &[LoginRecord] {
        self.config.logins()
    }

    /// Rendering layout
    pub fn format(&self) -> Format {
        self.config.format()
    }

    /// Append a login for `machine` with a plain user name.
    ///
    /// # Arguments
    ///
    /// * `machine` - Remote machine name
    /// * `username` - User on the remote machine
    /// * `password` - Handle for the token or password
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a field is empty or contains whitespace,
    /// or `SecretError` if the handle cannot be resolved.
    pub fn with_login<S>(&self, machine: &str, username: &str, password: &S) -> Result<Self>
    where
        S: Secret + ?Sized,
    {
        self.with_login_secret(machine, &Plaintext::new(username), password)
    }

    /// Append a login for `machine`, resolving both the user name and the
    /// password from handles.
    ///
    /// The user name is resolved first. Nothing is appended unless both
    /// resolve and validate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a field is empty or contains whitespace,
    /// or `SecretError` if a handle cannot be resolved.
    pub fn with_login_secret<U, S>(&self, machine: &str, username: &U, password: &S) -> Result<Self>
    where
        U: Secret + ?Sized,
        S: Secret + ?Sized,
    {
        validation::validate_token("machine", machine)?;

        let user = username.plaintext()?;
        validation::validate_token("username", &user)?;

        let plaintext = password.plaintext()?;
        validation::validate_token("password", &plaintext)?;
        debug!(
            machine,
            username_source = username.kind(),
            source = password.kind(),
            "resolved login credentials"
        );

        let mut next = self.clone();
        next.config
            .logins
            .push(LoginRecord::new(machine, user.as_str(), plaintext.as_str()));

        info!(machine, logins = next.config.logins.len(), "added login");
        Ok(next)
    }

    /// Append every entry of an existing auto-login file.
    ///
    /// Parsed entries are added after existing records, in document order.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the contents are malformed; nothing is added.
    pub fn with_file(&self, contents: &str) -> Result<Self> {
        let parsed = grammar::parse(contents)?;
        let count = parsed.len();

        let mut next = self.clone();
        next.config.logins.extend(parsed);

        info!(
            ingested = count,
            logins = next.config.logins.len(),
            "loaded auto-login file"
        );
        Ok(next)
    }

    /// Read `path` and append its entries, as [`Netrc::with_file`].
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or `ParseError`
    /// if it is malformed.
    pub fn with_file_path(&self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading auto-login file");

        let contents = Zeroizing::new(std::fs::read_to_string(path)?);
        self.with_file(&contents)
    }

    /// Rendered `.netrc` contents
    pub fn contents(&self) -> Zeroizing<String> {
        self.config.render()
    }

    /// Write the rendered file to `path` with mode 0600.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be written.
    pub fn as_file(&self, path: impl AsRef<Path>) -> Result<()> {
        materialize::write_file(path.as_ref(), &self.contents(), NETRC_FILE_MODE)
    }

    /// Wrap the rendered file as a named secret.
    ///
    /// Without a name, the secret is called `netrc-<digest>` where the
    /// digest covers the exact rendered bytes.
    pub fn as_secret(&self, name: Option<&str>) -> NamedSecret {
        NamedSecret::new(NETRC_PREFIX, name, self.contents())
    }
}
