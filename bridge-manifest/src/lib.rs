// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The `bridge.toml` connection registry.
//!
//! A registry lists named database connections, the runtime flags the
//! generator needs (debug, target dialect, backwards-compatible toggle) and
//! free-form parameters such as `<name>_database_classname` overrides.

mod connection;
mod error;
mod file;
mod manifest;
mod runtime;
mod validate;

pub use connection::Connection;
pub use error::{Error, Result, SourceContext};
pub use file::BridgeToml;
pub use manifest::{CLASSNAME_PARAMETER_SUFFIX, Manifest};
pub use runtime::{RuntimeConfig, TargetDialect, UnsupportedDialect};
