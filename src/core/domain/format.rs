//! Output format for auto-login files.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::LoginRecord;
use crate::error::ValidationError;

/// Textual layout used when rendering an auto-login file.
///
/// Only affects rendering; parsing accepts either layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `machine <m> login <u> password <p>` on a single line
    #[default]
    Compact,
    /// `machine`, `login` and `password` on three separate lines
    Full,
}

impl Format {
    /// Render one login in this format, newline-terminated.
    pub fn render(self, login: &LoginRecord) -> String {
        match self {
            Format::Compact => format!(
                "machine {} login {} password {}\n",
                login.machine(),
                login.username(),
                login.password()
            ),
            Format::Full => format!(
                "machine {}\nlogin {}\npassword {}\n",
                login.machine(),
                login.username(),
                login.password()
            ),
        }
    }

    /// Name as accepted on the command line and in manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Compact => "compact",
            Format::Full => "full",
        }
    }
}

impl FromStr for Format {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Format::Compact),
            "full" => Ok(Format::Full),
            _ => Err(ValidationError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
