//! Core library components.
//!
//! This module contains the credential models, the auto-login grammar and
//! the parser combinators it is built on, secret handles, and artifact
//! materialization.

pub mod combinator;
pub mod constants;
pub mod domain;
pub mod grammar;
pub mod manifest;
pub mod materialize;
pub mod netrc;
pub mod registry;
pub mod secret;
pub mod types;
pub mod validation;

pub use grammar::parse;
