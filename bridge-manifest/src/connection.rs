use serde::Deserialize;

/// Default charset used when a connection does not declare one.
pub const DEFAULT_CHARSET: &str = "utf8";

/// A named database connection as declared in `[connections.<name>]`.
///
/// Field names follow the Doctrine connection parameters (`driver`,
/// `dbname`, `user`), so existing Symfony2 configuration can be copied over
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Connection {
    /// Connection name; filled from the table key after parsing.
    #[serde(skip)]
    pub name: String,

    /// Driver name, e.g. `pdo_mysql`
    #[serde(rename = "driver")]
    pub driver_name: String,

    pub host: Option<String>,

    pub port: Option<u16>,

    #[serde(rename = "dbname", alias = "database")]
    pub database: Option<String>,

    #[serde(rename = "user", alias = "username")]
    pub username: Option<String>,

    pub password: Option<String>,

    /// Connection charset (default: utf8)
    #[serde(rename = "charset")]
    pub charset_param: Option<String>,
}

impl Connection {
    /// Create a connection with only a name and driver set.
    pub fn new(name: impl Into<String>, driver_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver_name: driver_name.into(),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set both username and password.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset_param = Some(charset.into());
        self
    }

    /// The declared charset, or `utf8` when absent.
    pub fn charset(&self) -> &str {
        self.charset_param.as_deref().unwrap_or(DEFAULT_CHARSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_doctrine_names() {
        let conn: Connection = toml::from_str(
            r#"
            driver = "pdo_mysql"
            host = "db1"
            port = 3306
            dbname = "app"
            user = "u"
            password = "p"
            charset = "utf8mb4"
            "#,
        )
        .unwrap();

        assert_eq!(conn.driver_name, "pdo_mysql");
        assert_eq!(conn.host.as_deref(), Some("db1"));
        assert_eq!(conn.port, Some(3306));
        assert_eq!(conn.database.as_deref(), Some("app"));
        assert_eq!(conn.username.as_deref(), Some("u"));
        assert_eq!(conn.password.as_deref(), Some("p"));
        assert_eq!(conn.charset(), "utf8mb4");
    }

    #[test]
    fn test_deserialize_aliases() {
        let conn: Connection = toml::from_str(
            r#"
            driver = "pdo_pgsql"
            database = "app"
            username = "admin"
            "#,
        )
        .unwrap();

        assert_eq!(conn.database.as_deref(), Some("app"));
        assert_eq!(conn.username.as_deref(), Some("admin"));
        assert_eq!(conn.password, None);
        assert_eq!(conn.port, None);
    }

    #[test]
    fn test_driver_is_required() {
        let result: Result<Connection, _> = toml::from_str(r#"host = "db1""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_charset_defaults_to_utf8() {
        let conn = Connection::new("main", "pdo_mysql");
        assert_eq!(conn.charset(), "utf8");
        assert_eq!(conn.with_charset("latin1").charset(), "latin1");
    }

    #[test]
    fn test_builder() {
        let conn = Connection::new("main", "pdo_pgsql")
            .with_host("db1")
            .with_port(5432)
            .with_database("app")
            .with_credentials("u", "p");

        assert_eq!(conn.name, "main");
        assert_eq!(conn.host.as_deref(), Some("db1"));
        assert_eq!(conn.port, Some(5432));
        assert_eq!(conn.username.as_deref(), Some("u"));
        assert_eq!(conn.password.as_deref(), Some("p"));
    }
}
