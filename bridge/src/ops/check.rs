//! Check operation - registry validation.

use std::path::Path;

use propel_bridge_codegen::Dialect;
use propel_bridge_manifest::Manifest;

use crate::reports::{CheckReport, ConnectionInfo};

/// Execute the check operation.
///
/// Reports every problem a generate run would hit (unknown drivers, an
/// unusable target dialect) plus overrides that match no connection.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let connections: Vec<ConnectionInfo> = manifest
        .connections
        .iter()
        .map(|(name, connection)| {
            let dialect = Dialect::from_driver(&connection.driver_name);
            if dialect.is_none() {
                errors.push(format!(
                    "connection '{}' uses unknown driver \"{}\"",
                    name, connection.driver_name
                ));
            }
            ConnectionInfo {
                name: name.clone(),
                driver: connection.driver_name.clone(),
                dialect,
            }
        })
        .collect();

    let target = match manifest.runtime.target_dialect() {
        Some(Ok(target)) => Some(target),
        Some(Err(e)) => {
            errors.push(e.to_string());
            None
        }
        None => {
            warnings.push(
                "no target dialect configured; generate will need --target or --runtime-version"
                    .to_string(),
            );
            None
        }
    };

    for name in manifest.orphan_classname_parameters() {
        warnings.push(format!(
            "classname override for '{}' matches no connection",
            name
        ));
    }

    if !manifest.runtime.backwards_compatible_connections() {
        warnings.push(
            "backwards compatible connections are disabled; generated files will be empty"
                .to_string(),
        );
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        target,
        connections,
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use propel_bridge_manifest::TargetDialect;

    use super::*;

    fn run(content: &str) -> CheckReport {
        let manifest = Manifest::from_str(content).unwrap();
        check(&manifest, Path::new("bridge.toml"))
    }

    #[test]
    fn test_valid_registry() {
        let report = run(r#"
            [runtime]
            dialect = "v1"

            [connections.main]
            driver = "pdo_pgsql"
            "#);

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert_eq!(report.target, Some(TargetDialect::V1));
        assert_eq!(report.connections[0].dialect, Some(Dialect::Pgsql));
    }

    #[test]
    fn test_unknown_driver_is_error() {
        let report = run(r#"
            [runtime]
            dialect = "v2"

            [connections.main]
            driver = "pdo_mysql"

            [connections.old]
            driver = "oci8"
            "#);

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            ["connection 'old' uses unknown driver \"oci8\""]
        );
        assert_eq!(report.connections[1].dialect, None);
    }

    #[test]
    fn test_untested_version_is_error() {
        let report = run(r#"
            [runtime]
            version = "1.0.0"
            "#);
        assert!(!report.is_valid());
        assert_eq!(report.target, None);
    }

    #[test]
    fn test_warnings() {
        let report = run(r#"
            [runtime]
            enable_backwards_compatible_connections = false

            [parameters]
            reports_database_classname = "ReportsPDO"
            "#);

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 3);
        assert!(report.warnings[1].contains("'reports'"));
    }
}
