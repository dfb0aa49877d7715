//! Secret handles.
//!
//! A secret handle is anything that can be resolved to plaintext. Resolution
//! is the last step before a value enters a credential model, and the
//! plaintext it yields is wiped when dropped.
//!
//! ## Handle syntax
//!
//! - `env:NAME`: value of environment variable `NAME`
//! - `file:PATH`: contents of `PATH`, minus one trailing newline
//! - `prompt`: hidden interactive input, or one line of stdin when piped

use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, SecretError};

/// An opaque reference to a sensitive value.
pub trait Secret {
    /// Resolve the handle to its plaintext value.
    ///
    /// # Errors
    ///
    /// Returns `SecretError` if the backing source is missing or unreadable.
    fn plaintext(&self) -> Result<Zeroizing<String>>;

    /// Short description of the source, safe to log.
    fn kind(&self) -> &'static str;
}

impl<S: Secret + ?Sized> Secret for &S {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        (**self).plaintext()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

/// A secret held directly in memory.
#[derive(Clone)]
pub struct Plaintext(Zeroizing<String>);

impl Plaintext {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }
}

impl Secret for Plaintext {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        Ok(self.0.clone())
    }

    fn kind(&self) -> &'static str {
        "plaintext"
    }
}

impl std::fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Plaintext(<redacted>)")
    }
}

/// A secret read from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Secret for EnvSecret {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        debug!(var = %self.var, "resolving secret from environment");
        match std::env::var(&self.var) {
            Ok(value) => Ok(Zeroizing::new(value)),
            Err(std::env::VarError::NotPresent) => {
                Err(SecretError::EnvNotSet(self.var.clone()).into())
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(SecretError::EnvNotUnicode(self.var.clone()).into())
            }
        }
    }

    fn kind(&self) -> &'static str {
        "env"
    }
}

/// A secret read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSecret {
    path: PathBuf,
}

impl FileSecret {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the secret is read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Secret for FileSecret {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        debug!(path = %self.path.display(), "resolving secret from file");
        let mut contents = Zeroizing::new(std::fs::read_to_string(&self.path).map_err(
            |source| SecretError::ReadFile {
                path: self.path.display().to_string(),
                source,
            },
        )?);
        strip_newline(&mut contents);
        Ok(contents)
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

/// A secret entered by the user.
///
/// Reads one line from stdin when it is not a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSecret {
    label: String,
}

impl PromptSecret {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Secret for PromptSecret {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        if !io::stdin().is_terminal() {
            let mut line = Zeroizing::new(String::new());
            io::stdin()
                .lock()
                .read_line(&mut line)
                .map_err(|e| SecretError::Prompt(e.to_string()))?;
            strip_newline(&mut line);
            return Ok(line);
        }

        let value = Password::new()
            .with_prompt(&self.label)
            .interact()
            .map_err(|e| SecretError::Prompt(e.to_string()))?;
        Ok(Zeroizing::new(value))
    }

    fn kind(&self) -> &'static str {
        "prompt"
    }
}

/// A parsed textual secret handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretRef {
    Env(EnvSecret),
    File(FileSecret),
    Prompt(PromptSecret),
}

impl SecretRef {
    /// Replace the prompt label; other sources are returned unchanged.
    pub fn labelled(self, label: impl Into<String>) -> Self {
        match self {
            SecretRef::Prompt(_) => SecretRef::Prompt(PromptSecret::new(label)),
            other => other,
        }
    }
}

impl FromStr for SecretRef {
    type Err = SecretError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "prompt" {
            return Ok(SecretRef::Prompt(PromptSecret::new("Password")));
        }

        match s.split_once(':') {
            Some(("env", var)) if !var.is_empty() => Ok(SecretRef::Env(EnvSecret::new(var))),
            Some(("file", path)) if !path.is_empty() => {
                Ok(SecretRef::File(FileSecret::new(path)))
            }
            _ => Err(SecretError::InvalidReference(s.to_string())),
        }
    }
}

impl Secret for SecretRef {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        match self {
            SecretRef::Env(s) => s.plaintext(),
            SecretRef::File(s) => s.plaintext(),
            SecretRef::Prompt(s) => s.plaintext(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            SecretRef::Env(s) => s.kind(),
            SecretRef::File(s) => s.kind(),
            SecretRef::Prompt(s) => s.kind(),
        }
    }
}

/// A value given either as a secret handle or verbatim.
///
/// Text that looks like a handle (`env:`, `file:` or `prompt`) is parsed as
/// one; anything else is taken literally. Used for user names, which may be
/// sensitive but are usually plain.
#[derive(Debug, Clone)]
pub enum ValueRef {
    Handle(SecretRef),
    Literal(Plaintext),
}

impl ValueRef {
    /// Replace the prompt label; other sources are returned unchanged.
    pub fn labelled(self, label: impl Into<String>) -> Self {
        match self {
            ValueRef::Handle(handle) => ValueRef::Handle(handle.labelled(label)),
            literal => literal,
        }
    }
}

impl FromStr for ValueRef {
    type Err = SecretError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "prompt" || s.starts_with("env:") || s.starts_with("file:") {
            return s.parse().map(ValueRef::Handle);
        }
        Ok(ValueRef::Literal(Plaintext::new(s)))
    }
}

impl Secret for ValueRef {
    fn plaintext(&self) -> Result<Zeroizing<String>> {
        match self {
            ValueRef::Handle(s) => s.plaintext(),
            ValueRef::Literal(s) => s.plaintext(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ValueRef::Handle(s) => s.kind(),
            ValueRef::Literal(s) => s.kind(),
        }
    }
}

/// Drop a single trailing `\n` or `\r\n`.
fn strip_newline(value: &mut String) {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
}
