//! DSN construction.
//!
//! The two formats build their DSNs differently: the v1 URL drops an unset
//! or zero port, the v2 PDO string always carries `port=` even when empty.

use propel_bridge_manifest::Connection;

use crate::Dialect;

/// Host placed in file-based v1 DSNs; the runtime requires one but never
/// reads it.
pub const FILE_DSN_HOST: &str = "hack.nl";

/// Build the URL-style DSN of the v1 format.
///
/// - file-based: `sqlite://hack.nl/<database>`
/// - networked: `<dialect>://<user>:<pass>@<host>[:<port>]/<database>?encoding=<charset>`
pub fn url_dsn(dialect: Dialect, connection: &Connection) -> String {
    let database = connection.database.as_deref().unwrap_or_default();

    if dialect.is_file_based() {
        return format!("{}://{}/{}", dialect, FILE_DSN_HOST, database);
    }

    let port = match connection.port {
        Some(port) if port != 0 => format!(":{}", port),
        _ => String::new(),
    };

    format!(
        "{}://{}:{}@{}{}/{}?encoding={}",
        dialect,
        connection.username.as_deref().unwrap_or_default(),
        connection.password.as_deref().unwrap_or_default(),
        connection.host.as_deref().unwrap_or_default(),
        port,
        database,
        connection.charset(),
    )
}

/// Build the PDO-style DSN of the v2 format:
/// `<dialect>:dbname=<database>;host=<host>;port=<port>`.
///
/// All three fields are always present; unset values render empty.
pub fn pdo_dsn(dialect: Dialect, connection: &Connection) -> String {
    format!(
        "{}:dbname={};host={};port={}",
        dialect,
        connection.database.as_deref().unwrap_or_default(),
        connection.host.as_deref().unwrap_or_default(),
        connection
            .port
            .map(|port| port.to_string())
            .unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_dsn_sqlite_uses_fixed_host() {
        let conn = Connection::new("main", "pdo_sqlite")
            .with_host("ignored")
            .with_database("test.db");
        assert_eq!(url_dsn(Dialect::Sqlite, &conn), "sqlite://hack.nl/test.db");
    }

    #[test]
    fn test_url_dsn_mysql_without_port() {
        let conn = Connection::new("main", "pdo_mysql")
            .with_host("db1")
            .with_database("app")
            .with_credentials("u", "p");
        assert_eq!(
            url_dsn(Dialect::Mysql, &conn),
            "mysql://u:p@db1/app?encoding=utf8"
        );
    }

    #[test]
    fn test_url_dsn_zero_port_is_omitted() {
        let conn = Connection::new("main", "pdo_mysql")
            .with_host("db1")
            .with_port(0)
            .with_database("app")
            .with_credentials("u", "p");
        assert_eq!(
            url_dsn(Dialect::Mysql, &conn),
            "mysql://u:p@db1/app?encoding=utf8"
        );
    }

    #[test]
    fn test_url_dsn_with_port_and_charset() {
        let conn = Connection::new("main", "pdo_pgsql")
            .with_host("db1")
            .with_port(5432)
            .with_database("app")
            .with_credentials("u", "p")
            .with_charset("latin1");
        assert_eq!(
            url_dsn(Dialect::Pgsql, &conn),
            "pgsql://u:p@db1:5432/app?encoding=latin1"
        );
    }

    #[test]
    fn test_url_dsn_missing_credentials_render_empty() {
        let conn = Connection::new("main", "pdo_mysql")
            .with_host("db1")
            .with_database("app");
        assert_eq!(
            url_dsn(Dialect::Mysql, &conn),
            "mysql://:@db1/app?encoding=utf8"
        );
    }

    #[test]
    fn test_pdo_dsn_with_port() {
        let conn = Connection::new("main", "pdo_pgsql")
            .with_host("db1")
            .with_port(5432)
            .with_database("app");
        assert_eq!(
            pdo_dsn(Dialect::Pgsql, &conn),
            "pgsql:dbname=app;host=db1;port=5432"
        );
    }

    #[test]
    fn test_pdo_dsn_keeps_empty_port() {
        let conn = Connection::new("main", "pdo_mysql")
            .with_host("db1")
            .with_database("app");
        assert_eq!(
            pdo_dsn(Dialect::Mysql, &conn),
            "mysql:dbname=app;host=db1;port="
        );
    }

    #[test]
    fn test_pdo_dsn_keeps_zero_port() {
        let conn = Connection::new("main", "pdo_mysql")
            .with_host("db1")
            .with_port(0)
            .with_database("app");
        assert_eq!(
            pdo_dsn(Dialect::Mysql, &conn),
            "mysql:dbname=app;host=db1;port=0"
        );
    }

    #[test]
    fn test_pdo_dsn_sqlite() {
        let conn = Connection::new("main", "pdo_sqlite").with_database("test.db");
        assert_eq!(
            pdo_dsn(Dialect::Sqlite, &conn),
            "sqlite:dbname=test.db;host=;port="
        );
    }
}
