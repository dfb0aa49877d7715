//! Netrc command.
//!
//! Builds an auto-login file from existing files and login triples.

use std::path::PathBuf;

use tracing::info;

use crate::cli::emit::Destination;
use crate::core::domain::Format;
use crate::core::netrc::Netrc;
use crate::core::secret::{SecretRef, ValueRef};
use crate::error::Result;

/// Build an auto-login file.
///
/// Files are ingested first, then `logins` (flattened
/// `MACHINE USERNAME PASSWORD` triples) are appended in argument order.
/// USERNAME may be a handle or a literal name; PASSWORD must be a handle.
pub fn execute(
    format: Format,
    files: &[PathBuf],
    logins: &[String],
    destination: &Destination,
) -> Result<()> {
    info!(format = %format, files = files.len(), "building auto-login file");

    let mut netrc = Netrc::new(format);
    for file in files {
        netrc = netrc.with_file_path(file)?;
    }

    for triple in logins.chunks_exact(3) {
        let [machine, username, password] = triple else {
            continue;
        };
        let username = username
            .parse::<ValueRef>()?
            .labelled(format!("Username for {}", machine));
        let password = password
            .parse::<SecretRef>()?
            .labelled(format!("Password for {}", machine));
        netrc = netrc.with_login_secret(machine, &username, &password)?;
    }

    destination.emit(&netrc)
}
