//! Runtime flags from the `[runtime]` section.

use std::{fmt, str::FromStr};

use propel_bridge_core::Version;
use serde::{Deserialize, Serialize};

/// The dialect discriminator was neither `v1` nor `v2`, or a runtime version
/// maps to no supported dialect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UnsupportedDialect {
    /// The rejected discriminator or version string.
    pub value: String,
    message: String,
}

impl UnsupportedDialect {
    fn discriminator(value: &str) -> Self {
        Self {
            value: value.to_string(),
            message: format!(
                "unsupported target dialect '{}', expected 'v1' or 'v2'",
                value
            ),
        }
    }

    fn runtime_version(version: &Version) -> Self {
        Self {
            value: version.to_string(),
            message: format!(
                "untested runtime version '{}', supported are 1.1, 1.3, 1.4 and 1.5",
                version
            ),
        }
    }
}

/// Output syntax of the generated database configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetDialect {
    /// One `setDatabase()` statement per connection (runtime 1.1)
    V1,
    /// A returned array of connections (runtime 1.3 to 1.5)
    V2,
}

impl TargetDialect {
    /// Returns the discriminator as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDialect::V1 => "v1",
            TargetDialect::V2 => "v2",
        }
    }

    /// Pick the dialect a legacy runtime release expects.
    ///
    /// Only full releases (`X.Y.Z`) of the release lines the generated output
    /// was verified against are accepted; there is no fallback for newer or
    /// older versions.
    pub fn from_runtime_version(version: &Version) -> Result<Self, UnsupportedDialect> {
        if version.patch().is_none() {
            return Err(UnsupportedDialect::runtime_version(version));
        }
        match (version.major(), version.minor()) {
            (1, 1) => Ok(TargetDialect::V1),
            (1, 3) | (1, 4) | (1, 5) => Ok(TargetDialect::V2),
            _ => Err(UnsupportedDialect::runtime_version(version)),
        }
    }
}

impl fmt::Display for TargetDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetDialect {
    type Err = UnsupportedDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(TargetDialect::V1),
            "v2" => Ok(TargetDialect::V2),
            _ => Err(UnsupportedDialect::discriminator(s)),
        }
    }
}

impl TryFrom<String> for TargetDialect {
    type Error = UnsupportedDialect;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TargetDialect> for String {
    fn from(dialect: TargetDialect) -> Self {
        dialect.as_str().to_string()
    }
}

/// The `[runtime]` section of bridge.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Kernel debug flag; selects `DebugPDO` over `PropelPDO` (default: false)
    #[serde(default)]
    pub debug: bool,

    /// Explicit target dialect (`v1` or `v2`)
    pub dialect: Option<TargetDialect>,

    /// Legacy runtime version, used when `dialect` is not set
    pub version: Option<Version>,

    /// Export the registry connections to the legacy runtime (default: true)
    pub enable_backwards_compatible_connections: Option<bool>,
}

impl RuntimeConfig {
    /// Resolve the target dialect: `dialect` wins, otherwise `version` is
    /// mapped. Returns `None` when neither is configured.
    pub fn target_dialect(&self) -> Option<Result<TargetDialect, UnsupportedDialect>> {
        if let Some(dialect) = self.dialect {
            return Some(Ok(dialect));
        }
        self.version
            .as_ref()
            .map(TargetDialect::from_runtime_version)
    }

    /// Whether connections are handed to the legacy runtime at all.
    ///
    /// Only an explicit `false` disables the export.
    pub fn backwards_compatible_connections(&self) -> bool {
        self.enable_backwards_compatible_connections.unwrap_or(true)
    }
}
