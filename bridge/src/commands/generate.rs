use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use propel_bridge_core::Version;
use propel_bridge_manifest::{BridgeToml, TargetDialect};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateRequest},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to bridge.toml (defaults to ./bridge.toml)
    #[arg(short, long, default_value = "bridge.toml")]
    pub config: PathBuf,

    /// Output file for the generated configuration
    #[arg(short, long, default_value = "config/databases.php")]
    pub output: PathBuf,

    /// Target dialect, v1 or v2 (overrides bridge.toml)
    #[arg(short, long)]
    pub target: Option<TargetDialect>,

    /// Legacy runtime version to pick the dialect from, e.g. 1.4.20
    #[arg(long, conflicts_with = "target")]
    pub runtime_version: Option<Version>,

    /// Use the debug connection class regardless of bridge.toml
    #[arg(long)]
    pub debug: bool,

    /// Do not overwrite an existing output file
    #[arg(long)]
    pub keep_existing: bool,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let bridge_toml = BridgeToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            bridge_toml.manifest(),
            GenerateRequest {
                output: &self.output,
                dry_run: self.dry_run,
                target: self.target,
                runtime_version: self.runtime_version.as_ref(),
                debug: self.debug,
                keep_existing: self.keep_existing,
            },
        )
        .wrap_err("Failed to generate database configuration")?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
