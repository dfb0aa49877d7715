//! Build command.
//!
//! Builds every artifact a manifest declares, auto-login file first.

use std::path::Path;

use crate::cli::emit::Destination;
use crate::cli::output;
use crate::core::manifest::{Manifest, Outputs};
use crate::error::Result;

/// Build the artifacts declared in `manifest`.
pub fn execute(manifest: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest)?;

    if let Some(netrc) = manifest.build_netrc()? {
        if let Some(section) = &manifest.netrc {
            destination(&manifest, &section.outputs()).emit(&netrc)?;
        }
    }

    if let Some(login) = manifest.build_registry()? {
        if let Some(section) = &manifest.registry {
            destination(&manifest, &section.outputs()).emit(&login)?;
        }
    }

    output::dimmed("build complete");
    Ok(())
}

fn destination(manifest: &Manifest, outputs: &Outputs) -> Destination {
    Destination {
        output: outputs.output.as_deref().map(|p| manifest.resolve(p)),
        secret: outputs.secret.clone().map(Some),
        secret_dir: manifest.secret_dir(outputs),
    }
}
