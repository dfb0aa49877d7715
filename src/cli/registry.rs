//! Registry command.
//!
//! Builds a container registry auth config from credential triples.

use tracing::info;

use crate::cli::emit::Destination;
use crate::core::registry::OciLogin;
use crate::core::secret::SecretRef;
use crate::error::Result;

/// Build a registry auth config from flattened
/// `HOSTNAME USERNAME PASSWORD` triples.
pub fn execute(auths: &[String], destination: &Destination) -> Result<()> {
    info!(registries = auths.len() / 3, "building registry config");

    let mut login = OciLogin::new();
    for triple in auths.chunks_exact(3) {
        let [hostname, username, password] = triple else {
            continue;
        };
        let password = password
            .parse::<SecretRef>()?
            .labelled(format!("Password for {}", hostname));
        login = login.with_auth(hostname, username, &password)?;
    }

    destination.emit(&login)
}
