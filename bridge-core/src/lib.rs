//! Core utilities and types for the Propel configuration bridge.
//!
//! This crate provides the file handling and version types shared by
//! the manifest, codegen and CLI crates.

mod file;
mod version;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
pub use version::Version;
