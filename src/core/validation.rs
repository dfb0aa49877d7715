//! Input validation for authfile operations.
//!
//! Rejects values that would produce an artifact the consumer cannot read
//! back, before they reach the model.

use crate::error::{Result, ValidationError};

/// Validate a value that must be present.
///
/// # Arguments
///
/// * `field` - Field name used in the error message
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError::Empty` if the value is empty.
pub fn validate_required(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::Empty(field).into());
    }
    Ok(())
}

/// Validate a value written as a single auto-login token.
///
/// Tokens are whitespace-delimited on the way back in, so they must be
/// non-empty and free of whitespace.
///
/// # Errors
///
/// Returns `ValidationError` if the token is empty or contains whitespace.
pub fn validate_token(field: &'static str, value: &str) -> Result<()> {
    validate_required(field, value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::Whitespace { field }.into());
    }

    Ok(())
}

/// Validate a registry user name.
///
/// The user name is joined to the password with `:`, so it cannot contain
/// one itself.
///
/// # Errors
///
/// Returns `ValidationError` if the user name is empty or contains `:`.
pub fn validate_registry_username(value: &str) -> Result<()> {
    validate_required("username", value)?;

    if value.contains(':') {
        return Err(ValidationError::ForbiddenChar {
            field: "username",
            ch: ':',
        }
        .into());
    }

    Ok(())
}

/// Validate an explicit secret name.
///
/// Names become file names when a secret is written to a directory.
///
/// # Errors
///
/// Returns `ValidationError` if the name is empty or contains a path separator.
pub fn validate_secret_name(name: &str) -> Result<()> {
    validate_token("secret name", name)?;

    for ch in ['/', '\\'] {
        if name.contains(ch) {
            return Err(ValidationError::ForbiddenChar {
                field: "secret name",
                ch,
            }
            .into());
        }
    }

    if name == "." || name == ".." {
        return Err(ValidationError::ForbiddenChar {
            field: "secret name",
            ch: '.',
        }
        .into());
    }

    Ok(())
}

/// Report the permission bits of `path` when group or others can access it.
///
/// Returns `Ok(None)` when the file is private to its owner.
///
/// # Errors
///
/// Returns an IO error if the file metadata cannot be read.
#[cfg(unix)]
pub fn insecure_permissions(path: &std::path::Path) -> Result<Option<u32>> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode() & 0o777;
    Ok((mode & 0o077 != 0).then_some(mode))
}

#[cfg(not(unix))]
pub fn insecure_permissions(_path: &std::path::Path) -> Result<Option<u32>> {
    Ok(None)
}
