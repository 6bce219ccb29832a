//! Manifest types and parsing for bridge.toml files.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Connection, Error, Result, RuntimeConfig,
    error::SourceContext,
    validate::{find_connection_span, find_key_span, validate_connection_name},
};

/// Suffix of the parameters that override a connection's `classname`.
pub const CLASSNAME_PARAMETER_SUFFIX: &str = "_database_classname";

/// Root manifest for bridge.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Runtime flags
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Connections in declaration order
    #[serde(default)]
    pub connections: IndexMap<String, Connection>,

    /// Free-form string parameters (e.g. `main_database_classname`)
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "bridge.toml")
    }
}

impl Manifest {
    /// Parse a bridge.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a bridge.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Connections to hand to the legacy runtime.
    ///
    /// Empty when `enable_backwards_compatible_connections` is explicitly
    /// `false`; the registry is not consulted at all in that case.
    pub fn backwards_compatible_connections(&self) -> IndexMap<String, Connection> {
        if self.runtime.backwards_compatible_connections() {
            self.connections.clone()
        } else {
            IndexMap::new()
        }
    }

    /// Classname override parameters, keyed by connection name.
    pub fn classname_parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().filter_map(|(key, value)| {
            key.strip_suffix(CLASSNAME_PARAMETER_SUFFIX)
                .filter(|name| !name.is_empty())
                .map(|name| (name, value.as_str()))
        })
    }

    /// Classname overrides whose connection does not exist.
    pub fn orphan_classname_parameters(&self) -> Vec<&str> {
        self.classname_parameters()
            .filter(|(name, _)| !self.connections.contains_key(*name))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    for (name, connection) in manifest.connections.iter_mut() {
        connection.name = name.clone();
    }

    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for name in manifest.connections.keys() {
        if let Some(reason) = validate_connection_name(name) {
            return Err(ctx.invalid_connection_name_error(
                name,
                reason,
                find_connection_span(ctx.src(), name),
            ));
        }
    }

    for (key, value) in &manifest.parameters {
        if key.ends_with(CLASSNAME_PARAMETER_SUFFIX) && value.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("classname override '{}' is empty", key),
                find_key_span(ctx.src(), key),
            ));
        }
    }

    Ok(())
}
