//! The v1 format: one `setDatabase()` statement per connection.

use indexmap::IndexMap;
use propel_bridge_manifest::{Connection, TargetDialect};
use tracing::debug;

use super::{ConnectionFormat, PROPEL_DATABASE_CLASS};
use crate::{
    Dialect, GenerateOptions, Result,
    builder::CodeBuilder,
    dsn,
    php::{PhpArray, quote},
};

/// Emits `$this->setDatabase('<name>', new sfPropelDatabase(array (...)));`
/// for every connection, each followed by a blank line.
pub struct StatementFormat;

impl ConnectionFormat for StatementFormat {
    fn target(&self) -> TargetDialect {
        TargetDialect::V1
    }

    fn record(
        &self,
        name: &str,
        connection: &Connection,
        _options: &GenerateOptions,
    ) -> Result<PhpArray> {
        let dialect = Dialect::for_connection(name, connection)?;
        Ok(PhpArray::new()
            .entry("dsn", dsn::url_dsn(dialect, connection))
            .entry("name", name))
    }

    fn render(
        &self,
        connections: &IndexMap<String, Connection>,
        options: &GenerateOptions,
    ) -> Result<String> {
        let mut builder = CodeBuilder::var_export();

        for (name, connection) in connections {
            let record = self.record(name, connection, options)?;
            debug!(connection = %name, driver = %connection.driver_name, "emitting setDatabase statement");

            builder
                .push_line(&format!(
                    "$this->setDatabase({}, new {}({}));",
                    quote(name),
                    PROPEL_DATABASE_CLASS,
                    record.render()
                ))
                .push_blank();
        }

        Ok(builder.build())
    }
}
