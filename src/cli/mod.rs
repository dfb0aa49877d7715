//! Command-line interface.

pub mod build;
pub mod check;
pub mod completions;
pub mod emit;
pub mod netrc;
pub mod output;
pub mod registry;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::MANIFEST_FILE;
use crate::core::domain::Format;
use emit::Destination;

/// authfile - Build credential files from secret handles.
#[derive(Parser)]
#[command(
    name = "authfile",
    about = "Build netrc auto-login files and OCI registry auth configs from secret handles",
    version,
    after_help = "PASSWORD values are handles: env:NAME, file:PATH or prompt"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Build an auto-login (.netrc) file
    Netrc {
        /// Layout of the rendered file
        #[arg(long, default_value = "compact")]
        format: Format,

        /// Ingest an existing auto-login file (repeatable, read before logins)
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        /// Add a login (repeatable); USERNAME may be a handle or a literal
        #[arg(
            long = "login",
            num_args = 3,
            value_names = ["MACHINE", "USERNAME", "PASSWORD"]
        )]
        logins: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build an OCI registry auth config (config.json)
    Registry {
        /// Add a registry credential (repeatable)
        #[arg(
            long = "auth",
            num_args = 3,
            value_names = ["HOSTNAME", "USERNAME", "PASSWORD"]
        )]
        auths: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build every artifact declared in a manifest
    Build {
        /// Manifest to build
        #[arg(short, long, default_value = MANIFEST_FILE)]
        manifest: PathBuf,
    },

    /// Validate an auto-login file and list its machines
    Check {
        /// File to check
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Artifact destination flags.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write the artifact to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Publish as a named secret (name derived from contents when omitted)
    #[arg(long, value_name = "NAME", num_args = 0..=1)]
    pub secret: Option<Option<String>>,

    /// Directory named secrets are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub secret_dir: PathBuf,
}

impl From<OutputArgs> for Destination {
    fn from(args: OutputArgs) -> Self {
        Destination {
            output: args.output,
            secret: args.secret,
            secret_dir: args.secret_dir,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Netrc {
            format,
            files,
            logins,
            output,
        } => netrc::execute(format, &files, &logins, &output.into()),
        Registry { auths, output } => registry::execute(&auths, &output.into()),
        Build { manifest } => build::execute(&manifest),
        Check { file, json } => check::execute(&file, json),
        Completions { shell } => completions::execute(shell),
    }
}
