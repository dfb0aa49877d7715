//! authfile - Build credential files from secret handles.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── netrc         # Build an auto-login file
//! │   ├── registry      # Build a registry auth config
//! │   ├── build         # Build everything a manifest declares
//! │   ├── check         # Validate an auto-login file
//! │   ├── emit          # Artifact destinations
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── combinator    # Parser combinators
//!     ├── grammar       # Auto-login grammar
//!     ├── domain/       # Login records and render formats
//!     ├── netrc         # Auto-login builder
//!     ├── registry      # Registry auth builder
//!     ├── secret        # Secret handles (env, file, prompt)
//!     ├── materialize   # Content-addressed named secrets
//!     ├── manifest      # authfile.toml
//!     └── validation    # Input validation
//! ```
//!
//! # Example
//!
//! ```
//! use authfile::core::domain::Format;
//! use authfile::core::netrc::Netrc;
//! use authfile::core::secret::Plaintext;
//!
//! let netrc = Netrc::new(Format::Full)
//!     .with_file("machine gitlab.com login joker password arkam")
//!     .unwrap()
//!     .with_login("github.com", "batman", &Plaintext::new("gotham"))
//!     .unwrap();
//!
//! let secret = netrc.as_secret(None);
//! assert!(secret.name().starts_with("netrc-"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
