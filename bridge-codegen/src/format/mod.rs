//! Output formats.
//!
//! Each [`TargetDialect`] has one [`ConnectionFormat`] that renders the body
//! of the generated file (everything after the banner).

mod array;
mod statements;

use indexmap::IndexMap;
use propel_bridge_manifest::{Connection, TargetDialect};

pub use array::ArrayFormat;
pub use statements::StatementFormat;

use crate::{GenerateOptions, Result, php::PhpArray};

/// Runtime class every generated connection is instantiated as.
pub const PROPEL_DATABASE_CLASS: &str = "sfPropelDatabase";

/// Renders connections in one of the legacy configuration syntaxes.
pub trait ConnectionFormat {
    /// The dialect this format implements.
    fn target(&self) -> TargetDialect;

    /// Build the configuration record of a single connection.
    fn record(
        &self,
        name: &str,
        connection: &Connection,
        options: &GenerateOptions,
    ) -> Result<PhpArray>;

    /// Render all connections, in map order.
    ///
    /// Fails on the first connection whose record cannot be built; nothing
    /// is returned for the connections before it.
    fn render(
        &self,
        connections: &IndexMap<String, Connection>,
        options: &GenerateOptions,
    ) -> Result<String>;
}

/// Get the format for a target dialect.
pub fn for_target(target: TargetDialect) -> &'static dyn ConnectionFormat {
    match target {
        TargetDialect::V1 => &StatementFormat,
        TargetDialect::V2 => &ArrayFormat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_target() {
        assert_eq!(for_target(TargetDialect::V1).target(), TargetDialect::V1);
        assert_eq!(for_target(TargetDialect::V2).target(), TargetDialect::V2);
    }
}
