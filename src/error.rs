//! Error types for authfile.
//!
//! Each concern has its own error enum; all of them fold into [`Error`].
//! None of the messages ever include a resolved secret value.

use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures raised while matching auto-login text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '{expected}'")]
    Tag { expected: String },

    #[error("expected {expected}")]
    Expected { expected: &'static str },

    #[error("expected at least {min} {what}, matched {matched}")]
    TooFew {
        what: &'static str,
        min: usize,
        matched: usize,
    },

    #[error("malformed entry #{record} at line {line}: {source}")]
    Entry {
        record: usize,
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// Failures resolving a secret handle to plaintext.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("environment variable not set: {0}")]
    EnvNotSet(String),

    #[error("environment variable is not valid unicode: {0}")]
    EnvNotUnicode(String),

    #[error("failed to read secret file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read secret from prompt: {0}")]
    Prompt(String),

    #[error("invalid secret reference '{0}' (expected env:NAME, file:PATH or prompt)")]
    InvalidReference(String),
}

/// Rejections at the API boundary, before anything reaches the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{field} cannot contain whitespace")]
    Whitespace { field: &'static str },

    #[error("{field} cannot contain '{ch}'")]
    ForbiddenChar { field: &'static str, ch: char },

    #[error("invalid format '{0}' (expected compact or full)")]
    UnknownFormat(String),
}

/// Failures loading a build manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("failed to read manifest: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("manifest declares no netrc or registry section")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
