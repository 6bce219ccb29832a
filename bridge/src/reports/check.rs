//! Check command report data structures.

use std::path::PathBuf;

use propel_bridge_codegen::Dialect;
use propel_bridge_manifest::TargetDialect;

use super::output::{Output, Report};

/// One registry connection as seen by the check.
#[derive(Debug)]
pub struct ConnectionInfo {
    pub name: String,
    pub driver: String,
    /// `None` when the driver has no dialect.
    pub dialect: Option<Dialect>,
}

/// Report data from registry validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved target dialect, if configured and valid.
    pub target: Option<TargetDialect>,
    /// Connections in declaration order.
    pub connections: Vec<ConnectionInfo>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.is_valid() {
            return;
        }

        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if let Some(target) = self.target {
            out.key_value("  Dialect", target.as_str());
        }
        out.newline();

        let count = self.connections.len();
        out.section(&format!(
            "  {} connection{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for conn in &self.connections {
            let dialect = conn.dialect.map(|d| d.as_str()).unwrap_or("?");
            out.list_item(&format!("{} ({} -> {})", conn.name, conn.driver, dialect));
        }
    }
}
