//! Catalog tables that hold media file paths.
//!
//! Shotwell keeps absolute file paths in four tables. Every pass over the
//! catalog (prefix validation and the rewrite itself) walks
//! [`MEDIA_TABLES`] in the same order.
//!
//! Table and column names are spliced into SQL text because SQLite cannot
//! bind identifiers. They are compile-time constants restricted to ASCII
//! alphanumerics and underscores.
//!
//! # Examples
//!
//! ```
//! use shotwell_mover_core::MEDIA_TABLES;
//!
//! assert_eq!(MEDIA_TABLES[0].table, "PhotoTable");
//! assert_eq!(MEDIA_TABLES.len(), 4);
//! ```

/// Table that stores the catalog schema version.
pub const VERSION_TABLE: &str = "VersionTable";

/// Single integer column of [`VERSION_TABLE`].
pub const VERSION_COLUMN: &str = "schema_version";

/// A table holding media file paths and the column the path lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTableSpec {
    /// Table name as it appears in the catalog.
    pub table: &'static str,
    /// Column holding the absolute file path.
    pub column: &'static str,
}

impl MediaTableSpec {
    /// Creates a new table spec.
    pub const fn new(table: &'static str, column: &'static str) -> Self {
        Self { table, column }
    }
}

/// Every media table of a Shotwell catalog, in processing order.
pub const MEDIA_TABLES: &[MediaTableSpec] = &[
    MediaTableSpec::new("PhotoTable", "filename"),
    MediaTableSpec::new("VideoTable", "filename"),
    MediaTableSpec::new("BackingPhotoTable", "filepath"),
    MediaTableSpec::new("TombstoneTable", "filepath"),
];
