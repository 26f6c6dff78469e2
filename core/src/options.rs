//! Run options and default catalog location.

use std::path::PathBuf;

/// Location of Shotwell's catalog relative to the user's local data dir.
const CATALOG_RELATIVE_PATH: [&str; 2] = ["shotwell", "photo.db"];

/// Switches controlling a rewrite run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Refuse catalogs whose schema version is not supported.
    pub schema_check: bool,
    /// Skip prefix validation and rewrite every row unconditionally.
    pub ignore_different_prefix: bool,
    /// Copy the catalog file aside before touching it.
    pub backup: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            schema_check: true,
            ignore_different_prefix: false,
            backup: true,
        }
    }
}

/// Default catalog path, e.g. `~/.local/share/shotwell/photo.db` on Linux.
///
/// Falls back to a relative `photo.db` when the platform reports no local
/// data directory.
pub fn default_catalog_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(mut path) => {
            path.extend(CATALOG_RELATIVE_PATH);
            path
        }
        None => PathBuf::from(CATALOG_RELATIVE_PATH[1]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RewriteOptions::default();
        assert!(options.schema_check);
        assert!(!options.ignore_different_prefix);
        assert!(options.backup);
    }

    #[test]
    fn test_default_catalog_path_ends_with_photo_db() {
        let path = default_catalog_path();
        assert!(path.ends_with("photo.db"));
    }
}
