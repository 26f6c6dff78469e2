//! Schema version gating.

use std::fmt;

/// Catalog schema versions this tool knows how to rewrite.
pub const SUPPORTED_SCHEMA_VERSIONS: &[i64] = &[22];

/// Schema version read from the catalog's version table.
///
/// Shotwell stores an integer, but the value is kept as found so that a
/// catalog with an odd version can still be rewritten when the version
/// check is turned off.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    /// Integer version, the normal case.
    Number(i64),
    /// Any other stored value, rendered as text.
    Other(String),
}

impl SchemaVersion {
    /// Returns `true` if the version is in [`SUPPORTED_SCHEMA_VERSIONS`].
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Number(version) => SUPPORTED_SCHEMA_VERSIONS.contains(version),
            Self::Other(_) => false,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(version) => write!(f, "{version}"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Renders the supported set as `22, 23, ...` for error messages.
pub fn format_supported_versions() -> String {
    SUPPORTED_SCHEMA_VERSIONS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions() {
        assert!(SchemaVersion::Number(22).is_supported());
        assert!(!SchemaVersion::Number(21).is_supported());
        assert!(!SchemaVersion::Number(23).is_supported());
        assert!(!SchemaVersion::Other("22".to_string()).is_supported());
    }

    #[test]
    fn test_display_keeps_raw_value() {
        assert_eq!(SchemaVersion::Number(22).to_string(), "22");
        assert_eq!(SchemaVersion::Other("22-beta".to_string()).to_string(), "22-beta");
    }

    #[test]
    fn test_format_supported_versions() {
        assert_eq!(format_supported_versions(), "22");
    }
}
