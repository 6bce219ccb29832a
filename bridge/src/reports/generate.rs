//! Generate command report data structures.

use std::path::PathBuf;

use propel_bridge_core::WriteResult;
use propel_bridge_manifest::TargetDialect;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Dialect the file was generated for.
    pub target: TargetDialect,
    /// Names of the exported connections, in output order.
    pub connections: Vec<String>,
    /// Whether the registry connections were exported at all.
    pub backwards_compatible: bool,
    /// Written file or preview.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The output file was written (or kept).
    Written { path: PathBuf, write: WriteResult },
    /// Dry-run preview.
    Preview { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.backwards_compatible {
            out.warning("backwards compatible connections are disabled; no connections exported");
        }

        match &self.result {
            GenerationResult::Preview { content } => {
                out.preformatted(content.trim_end());
            }
            GenerationResult::Written { path, write } => {
                let verb = match write {
                    WriteResult::Written => "Generated",
                    WriteResult::Skipped => "Kept existing",
                };
                out.key_value(verb, &path.display().to_string());
                out.key_value("Dialect", self.target.as_str());
                out.newline();
                out.section(&format!("Connections ({})", self.connections.len()));
                for name in &self.connections {
                    out.list_item(name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            target: TargetDialect::V2,
            connections: vec!["main".to_string(), "reports".to_string()],
            backwards_compatible: true,
            result: GenerationResult::Written {
                path: PathBuf::from("config/databases.php"),
                write: WriteResult::Written,
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Generated: config/databases.php",
                "Dialect: v2",
                "",
                "Connections (2):",
                "  - main",
                "  - reports",
            ]
        );
    }

    #[test]
    fn test_render_preview_with_disabled_connections() {
        let report = GenerateReport {
            target: TargetDialect::V1,
            connections: Vec::new(),
            backwards_compatible: false,
            result: GenerationResult::Preview {
                content: "<?php\n\n\n".to_string(),
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines.len(), 2);
        assert!(out.lines[0].starts_with("warning: "));
        assert_eq!(out.lines[1], "<?php");
    }
}
