use propel_bridge_manifest::UnsupportedDialect;
use thiserror::Error;

/// Result type for transpiler operations
pub type Result<T> = std::result::Result<T, TranspileError>;

/// Errors that abort a generation run.
///
/// Both are fatal for the whole batch: no output is produced and the caller
/// must not write a file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranspileError {
    /// The target dialect discriminator is not `v1` or `v2`.
    #[error(transparent)]
    UnsupportedDialect(#[from] UnsupportedDialect),

    /// A connection uses a driver without a Propel dialect.
    #[error("unknown driver \"{driver}\" for connection '{connection}'")]
    UnknownDriver { driver: String, connection: String },
}
