//! Generate operation - registry to PHP configuration.

use std::path::Path;

use eyre::{Result, eyre};
use propel_bridge_codegen::{ConfigTranspiler, GenerateOptions, TranspileError};
use propel_bridge_core::{File, FileRules, Overwrite, Version};
use propel_bridge_manifest::{Manifest, TargetDialect};
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateRequest<'a> {
    /// Output file for the generated PHP.
    pub output: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
    /// Target dialect (overrides bridge.toml).
    pub target: Option<TargetDialect>,
    /// Runtime version to derive the dialect from (overrides bridge.toml).
    pub runtime_version: Option<&'a Version>,
    /// Force the debug classname.
    pub debug: bool,
    /// Leave an existing output file untouched.
    pub keep_existing: bool,
}

/// Resolve the target dialect: flags first, then the `[runtime]` section.
pub fn resolve_target(manifest: &Manifest, req: &GenerateRequest) -> Result<TargetDialect> {
    if let Some(target) = req.target {
        return Ok(target);
    }
    if let Some(version) = req.runtime_version {
        return TargetDialect::from_runtime_version(version)
            .map_err(|e| TranspileError::from(e).into());
    }
    match manifest.runtime.target_dialect() {
        Some(resolved) => resolved.map_err(|e| TranspileError::from(e).into()),
        None => Err(eyre!(
            "no target dialect configured; set [runtime] dialect or version, or pass --target"
        )),
    }
}

/// Execute the generate operation.
///
/// The file is only written when generation succeeds; any error leaves the
/// output path untouched.
pub fn generate(manifest: &Manifest, req: GenerateRequest) -> Result<GenerateReport> {
    let target = resolve_target(manifest, &req)?;

    let mut options = GenerateOptions::from_manifest(manifest, target);
    if req.debug {
        options.debug = true;
    }

    let connections = manifest.backwards_compatible_connections();
    let content = ConfigTranspiler::new(options).generate(&connections)?;

    let result = if req.dry_run {
        GenerationResult::Preview { content }
    } else {
        let overwrite = if req.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let file = File::new(req.output, content).with_rules(FileRules { overwrite });
        let write = file.write()?;
        info!(path = %req.output.display(), result = ?write, "wrote database configuration");

        GenerationResult::Written {
            path: req.output.to_path_buf(),
            write,
        }
    };

    Ok(GenerateReport {
        target,
        connections: connections.keys().cloned().collect(),
        backwards_compatible: manifest.runtime.backwards_compatible_connections(),
        result,
    })
}
