//! Legacy Propel database configuration generator.
//!
//! Turns the connections of a `bridge.toml` registry into the PHP source a
//! symfony 1.x application loads to configure its Propel connections.
//!
//! # Module Organization
//!
//! - [`builder`] - Line-oriented code building (CodeBuilder, Indent)
//! - [`php`] - PHP literal rendering in `var_export` style
//! - [`dialect`] - Driver to Propel dialect mapping
//! - [`dsn`] - DSN construction for both output formats
//! - [`format`] - The two output formats and their selection
//! - [`transpiler`] - The [`ConfigTranspiler`] entry point
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use propel_bridge_codegen::{GenerateOptions, generate};
//! use propel_bridge_manifest::{Connection, TargetDialect};
//!
//! let mut connections = IndexMap::new();
//! connections.insert(
//!     "main".to_string(),
//!     Connection::new("main", "pdo_sqlite").with_database("test.db"),
//! );
//!
//! let php = generate(&connections, &GenerateOptions::new(TargetDialect::V1)).unwrap();
//! assert!(php.contains("'dsn' => 'sqlite://hack.nl/test.db'"));
//! ```

pub mod builder;
pub mod dialect;
pub mod dsn;
pub mod format;
pub mod php;
pub mod transpiler;

mod classname;
mod error;
mod options;

pub use classname::ClassnameOverrides;
pub use dialect::Dialect;
pub use error::{Result, TranspileError};
pub use options::GenerateOptions;
pub use transpiler::{ConfigTranspiler, generate, generate_at};
