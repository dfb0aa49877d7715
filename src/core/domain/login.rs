//! Login record type.
//!
//! One resolved machine/login/password triple from an auto-login file.

use zeroize::Zeroizing;

use crate::core::types::{Machine, Username};

/// A single auto-login entry.
///
/// The password is plaintext once it lands here; it is wiped on drop and
/// never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRecord {
    machine: Machine,
    username: Username,
    password: Zeroizing<String>,
}

impl LoginRecord {
    /// Create a record from already-resolved values.
    pub fn new(
        machine: impl Into<Machine>,
        username: impl Into<Username>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            machine: machine.into(),
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Remote machine name
    pub fn machine(&self) -> &str {
        &self.machine
    }

    /// User on the remote machine
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Token or password for the user
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for LoginRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRecord")
            .field("machine", &self.machine)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
