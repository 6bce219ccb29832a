//! The generation entry point.

use chrono::{Local, NaiveDateTime};
use indexmap::IndexMap;
use propel_bridge_manifest::Connection;
use tracing::debug;

use crate::{GenerateOptions, Result, builder::CodeBuilder, format};

/// Marker comment identifying generated files.
pub const GENERATOR_MARKER: &str = "auto-generated by propel-bridge";

/// `chrono` format of the banner timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Generates legacy Propel database configuration.
///
/// Holds only its options; one instance can be reused for any number of
/// connection sets.
#[derive(Debug, Clone)]
pub struct ConfigTranspiler {
    options: GenerateOptions,
}

impl ConfigTranspiler {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate the PHP source, stamped with the local time.
    pub fn generate(&self, connections: &IndexMap<String, Connection>) -> Result<String> {
        self.generate_at(connections, Local::now().naive_local())
    }

    /// Generate the PHP source with an explicit banner timestamp.
    ///
    /// The output depends only on the inputs; two calls with the same
    /// arguments return identical strings.
    pub fn generate_at(
        &self,
        connections: &IndexMap<String, Connection>,
        generated_at: NaiveDateTime,
    ) -> Result<String> {
        let format = format::for_target(self.options.target_dialect);
        debug!(
            target_dialect = %self.options.target_dialect,
            connections = connections.len(),
            "generating legacy database configuration"
        );

        let body = format.render(connections, &self.options)?;

        let mut output = banner(generated_at);
        output.push_str(&body);
        output.push('\n');
        Ok(output)
    }
}

/// The file header: the PHP open tag, the generator marker and the timestamp,
/// followed by a blank line.
pub fn banner(generated_at: NaiveDateTime) -> String {
    let mut builder = CodeBuilder::var_export();
    builder
        .push_line("<?php")
        .push_comment(GENERATOR_MARKER)
        .push_comment(&format!(
            "generated on {}",
            generated_at.format(TIMESTAMP_FORMAT)
        ))
        .push_blank();
    builder.build()
}

/// Generate the PHP source for `connections`, stamped with the local time.
pub fn generate(
    connections: &IndexMap<String, Connection>,
    options: &GenerateOptions,
) -> Result<String> {
    ConfigTranspiler::new(options.clone()).generate(connections)
}

/// Generate the PHP source for `connections` with an explicit timestamp.
pub fn generate_at(
    connections: &IndexMap<String, Connection>,
    options: &GenerateOptions,
    generated_at: NaiveDateTime,
) -> Result<String> {
    ConfigTranspiler::new(options.clone()).generate_at(connections, generated_at)
}
