//! authfile - Build credential files from secret handles.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use authfile::cli::output;
use authfile::cli::{execute, Cli};
use authfile::core::constants::LOG_ENV;
use authfile::error::{Error, ManifestError, ParseError, SecretError, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("authfile=debug")
        } else {
            EnvFilter::new("authfile=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Parse(ParseError::Entry { .. }) => {
                Some("each entry needs machine, login and password in that order")
            }
            Error::Secret(SecretError::EnvNotSet(_)) => {
                Some("export the variable, or pass file:PATH or prompt instead")
            }
            Error::Secret(SecretError::InvalidReference(_)) => {
                Some("passwords are handles such as env:GITHUB_TOKEN")
            }
            Error::Validation(ValidationError::Whitespace { .. }) => {
                Some("auto-login tokens cannot contain spaces")
            }
            Error::Manifest(ManifestError::NotFound(_)) => {
                Some("create authfile.toml or pass --manifest PATH")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
