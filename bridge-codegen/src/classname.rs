use indexmap::IndexMap;

/// Connection class used when debugging.
pub const DEBUG_CLASSNAME: &str = "DebugPDO";

/// Connection class used otherwise.
pub const DEFAULT_CLASSNAME: &str = "PropelPDO";

/// Per-connection `classname` overrides, keyed by connection name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassnameOverrides {
    classnames: IndexMap<String, String>,
}

impl ClassnameOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classname for a connection.
    pub fn insert(&mut self, connection: impl Into<String>, classname: impl Into<String>) {
        self.classnames.insert(connection.into(), classname.into());
    }

    /// The override for a connection, if any.
    pub fn get(&self, connection: &str) -> Option<&str> {
        self.classnames.get(connection).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classnames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classnames.is_empty()
    }

    /// Resolve the classname of a connection: the override verbatim, else
    /// `DebugPDO` or `PropelPDO` depending on `debug`.
    pub fn resolve(&self, connection: &str, debug: bool) -> &str {
        match self.get(connection) {
            Some(classname) => classname,
            None if debug => DEBUG_CLASSNAME,
            None => DEFAULT_CLASSNAME,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ClassnameOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (connection, classname) in iter {
            overrides.insert(connection, classname);
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_override() {
        let overrides = ClassnameOverrides::new();
        assert_eq!(overrides.resolve("main", false), "PropelPDO");
        assert_eq!(overrides.resolve("main", true), "DebugPDO");
    }

    #[test]
    fn test_override_ignores_debug_flag() {
        let overrides: ClassnameOverrides = [("main", "CustomDB")].into_iter().collect();
        assert_eq!(overrides.resolve("main", false), "CustomDB");
        assert_eq!(overrides.resolve("main", true), "CustomDB");
        assert_eq!(overrides.resolve("other", true), "DebugPDO");
    }

    #[test]
    fn test_collect_keeps_last_duplicate() {
        let overrides: ClassnameOverrides = [("main", "A"), ("reports", "B"), ("main", "C")]
            .into_iter()
            .collect();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("main"), Some("C"));
    }

    #[test]
    fn test_insert() {
        let mut overrides = ClassnameOverrides::new();
        assert!(overrides.is_empty());
        overrides.insert("main", "LoggingPDO");
        assert_eq!(overrides.get("main"), Some("LoggingPDO"));
    }
}
