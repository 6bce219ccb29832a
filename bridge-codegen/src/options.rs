use propel_bridge_manifest::{Manifest, TargetDialect};

use crate::ClassnameOverrides;

/// Inputs of a generation run besides the connections themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Kernel debug flag
    pub debug: bool,
    /// Output syntax
    pub target_dialect: TargetDialect,
    /// Per-connection classname overrides
    pub classname_overrides: ClassnameOverrides,
}

impl GenerateOptions {
    pub fn new(target_dialect: TargetDialect) -> Self {
        Self {
            debug: false,
            target_dialect,
            classname_overrides: ClassnameOverrides::default(),
        }
    }

    /// Take the debug flag and classname overrides from a registry.
    pub fn from_manifest(manifest: &Manifest, target_dialect: TargetDialect) -> Self {
        Self {
            debug: manifest.runtime.debug,
            target_dialect,
            classname_overrides: manifest.classname_parameters().collect(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_classname_overrides(mut self, overrides: ClassnameOverrides) -> Self {
        self.classname_overrides = overrides;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_from_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [runtime]
            debug = true

            [parameters]
            main_database_classname = "CustomDB"
            "#,
        )
        .unwrap();

        let options = GenerateOptions::from_manifest(&manifest, TargetDialect::V2);
        assert!(options.debug);
        assert_eq!(options.target_dialect, TargetDialect::V2);
        assert_eq!(options.classname_overrides.get("main"), Some("CustomDB"));
    }

    #[test]
    fn test_from_manifest_only_takes_classname_parameters() {
        let manifest = Manifest::from_str(
            r#"
            [parameters]
            main_database_classname = "A"
            locale = "nl_NL"
            reports_database_classname_x = "C"
            "#,
        )
        .unwrap();

        let options = GenerateOptions::from_manifest(&manifest, TargetDialect::V1);
        assert_eq!(options.classname_overrides.len(), 1);
        assert_eq!(options.classname_overrides.get("main"), Some("A"));
    }

    #[test]
    fn test_builder() {
        let options = GenerateOptions::new(TargetDialect::V1).with_debug(true);
        assert!(options.debug);
        assert!(options.classname_overrides.is_empty());
    }
}
