//! The v2 format: a returned array of connections.

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

/// Fixed encoding of v2 records; the connection charset is not used here.
pub const RECORD_ENCODING: &str = "utf8";

/// Emits `return array(` with one `'<name>' => new sfPropelDatabase(...),`
/// entry per connection and a closing `);`.
pub struct ArrayFormat;

impl ConnectionFormat for ArrayFormat {
    fn target(&self) -> TargetDialect {
        TargetDialect::V2
    }

    fn record(
        &self,
        name: &str,
        connection: &Connection,
        options: &GenerateOptions,
    ) -> Result<PhpArray> {
        let dialect = Dialect::for_connection(name, connection)?;
        let classname = options.classname_overrides.resolve(name, options.debug);

        Ok(PhpArray::new()
            .entry("classname", classname)
            .entry("dsn", dsn::pdo_dsn(dialect, connection))
            .entry("username", connection.username.as_deref())
            .entry("password", connection.password.as_deref())
            .entry("persistent", true)
            .entry("pooling", true)
            .entry("encoding", RECORD_ENCODING)
            .entry("name", name))
    }

    fn render(
        &self,
        connections: &IndexMap<String, Connection>,
        options: &GenerateOptions,
    ) -> Result<String> {
        let mut builder = CodeBuilder::var_export();
        builder.push_line("return array(");

        for (name, connection) in connections {
            let record = self.record(name, connection, options)?;
            debug!(connection = %name, driver = %connection.driver_name, "emitting array entry");

            builder
                .push_line(&format!(
                    "{} => new {}({}),",
                    quote(name),
                    PROPEL_DATABASE_CLASS,
                    record.render()
                ))
                .push_blank();
        }

        builder.push_raw(");");
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassnameOverrides, php::PhpValue};

    fn pgsql() -> Connection {
        Connection::new("main", "pdo_pgsql")
            .with_host("db1")
            .with_port(5432)
            .with_database("app")
    }

    #[test]
    fn test_record_fields() {
        let options = GenerateOptions::new(TargetDialect::V2);
        let record = ArrayFormat.record("main", &pgsql(), &options).unwrap();

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            [
                "classname",
                "dsn",
                "username",
                "password",
                "persistent",
                "pooling",
                "encoding",
                "name"
            ]
        );
        assert_eq!(record.get("classname"), Some(&PhpValue::string("PropelPDO")));
        assert_eq!(
            record.get("dsn"),
            Some(&PhpValue::string("pgsql:dbname=app;host=db1;port=5432"))
        );
        assert_eq!(record.get("username"), Some(&PhpValue::Null));
        assert_eq!(record.get("persistent"), Some(&PhpValue::Bool(true)));
        assert_eq!(record.get("pooling"), Some(&PhpValue::Bool(true)));
        assert_eq!(record.get("encoding"), Some(&PhpValue::string("utf8")));
    }

    #[test]
    fn test_record_debug_classname() {
        let options = GenerateOptions::new(TargetDialect::V2).with_debug(true);
        let record = ArrayFormat.record("main", &pgsql(), &options).unwrap();
        assert_eq!(record.get("classname"), Some(&PhpValue::string("DebugPDO")));
    }

    #[test]
    fn test_record_classname_override() {
        let options = GenerateOptions::new(TargetDialect::V2)
            .with_debug(true)
            .with_classname_overrides([("main", "CustomDB")].into_iter().collect());
        let record = ArrayFormat.record("main", &pgsql(), &options).unwrap();
        assert_eq!(record.get("classname"), Some(&PhpValue::string("CustomDB")));
    }

    #[test]
    fn test_record_ignores_connection_charset() {
        let options = GenerateOptions::new(TargetDialect::V2);
        let conn = pgsql().with_charset("latin1");
        let record = ArrayFormat.record("main", &conn, &options).unwrap();
        assert_eq!(record.get("encoding"), Some(&PhpValue::string("utf8")));
    }

    #[test]
    fn test_render_empty() {
        let options = GenerateOptions::new(TargetDialect::V2);
        let body = ArrayFormat.render(&IndexMap::new(), &options).unwrap();
        assert_eq!(body, "return array(\n);");
    }

    #[test]
    fn test_render_keeps_trailing_comma() {
        let options = GenerateOptions::new(TargetDialect::V2);
        let mut connections = IndexMap::new();
        connections.insert("main".to_string(), pgsql());

        let body = ArrayFormat.render(&connections, &options).unwrap();
        assert!(body.starts_with("return array(\n'main' => new sfPropelDatabase(array (\n"));
        assert!(body.ends_with("  'name' => 'main',\n)),\n\n);"));
    }
}
