//! Driver to Propel dialect mapping.

use std::fmt;

use propel_bridge_manifest::Connection;

use crate::{Result, TranspileError};

/// Short driver-family token Propel uses in DSNs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Mysql,
    Pgsql,
    Sqlite,
}

/// Every supported driver name and the dialect it maps to.
pub const DRIVER_DIALECTS: &[(&str, Dialect)] = &[
    ("pdo_mysql", Dialect::Mysql),
    ("pdo_pgsql", Dialect::Pgsql),
    ("pdo_sqlite", Dialect::Sqlite),
];

impl Dialect {
    /// Look up the dialect for a driver name.
    pub fn from_driver(driver_name: &str) -> Option<Self> {
        DRIVER_DIALECTS
            .iter()
            .find(|(name, _)| *name == driver_name)
            .map(|(_, dialect)| *dialect)
    }

    /// Look up the dialect of the connection registered as `name`.
    ///
    /// Unrecognized drivers are an error, never passed through.
    pub fn for_connection(name: &str, connection: &Connection) -> Result<Self> {
        Self::from_driver(&connection.driver_name).ok_or_else(|| TranspileError::UnknownDriver {
            driver: connection.driver_name.clone(),
            connection: name.to_string(),
        })
    }

    /// Returns the dialect token as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Pgsql => "pgsql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Whether the dialect addresses a file instead of a network server.
    pub fn is_file_based(&self) -> bool {
        matches!(self, Dialect::Sqlite)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
