//! Check command.
//!
//! Parses an auto-login file strictly and lists its machines. Passwords are
//! never printed.

use std::path::Path;

use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::grammar;
use crate::core::validation;
use crate::error::Result;

#[derive(Serialize)]
struct Entry<'a> {
    machine: &'a str,
    login: &'a str,
}

/// Check an auto-login file.
pub fn execute(file: &Path, json: bool) -> Result<()> {
    debug!(path = %file.display(), "checking auto-login file");

    let contents = Zeroizing::new(std::fs::read_to_string(file)?);
    let logins = grammar::parse(&contents)?;

    if let Some(mode) = validation::insecure_permissions(file)? {
        output::warn(&format!(
            "{} is accessible by other users (mode {:o})",
            output::path(file),
            mode
        ));
        output::hint(&format!("run: chmod 600 {}", file.display()));
    }

    let entries: Vec<Entry<'_>> = logins
        .iter()
        .map(|l| Entry {
            machine: l.machine(),
            login: l.username(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let width = entries.iter().map(|e| e.machine.len()).max().unwrap_or(0);
    for entry in &entries {
        println!("{:width$}  {}", entry.machine, entry.login, width = width);
    }
    output::success(&format!(
        "{} valid ({} entr{})",
        output::path(file),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    ));

    Ok(())
}
