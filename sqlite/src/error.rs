//! Error types for catalog rewrite runs.
//!
//! Every variant is terminal for the run. Messages are shown to the user
//! verbatim, so they name the offending file, table or value.

use std::path::PathBuf;

use shotwell_mover_core::{PrefixMismatch, SchemaVersion};
use thiserror::Error;

/// Errors that can occur while rewriting a catalog.
#[derive(Debug, Error)]
pub enum MoverError {
    /// Copying the catalog aside failed; the database was not opened.
    #[error("failed to back up '{}' to '{}': {source}", .path.display(), .backup.display())]
    BackupFailed {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database could not be opened or the transaction could not begin.
    #[error("failed to open database '{}': {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The file is not an SQLite database or its version table could not be
    /// queried.
    #[error("couldn't obtain VersionTable from the database. Is {} a Shotwell database?", .path.display())]
    NotACatalogDatabase { path: PathBuf },

    /// The version query did not return exactly one row with one column.
    #[error("invalid schema version query results. File {} might be corrupted.", .path.display())]
    CorruptedMetadata { path: PathBuf },

    /// Schema version is outside the supported set.
    #[error("schema version {found} not supported (supported versions: {supported}).")]
    UnsupportedSchemaVersion {
        found: SchemaVersion,
        supported: String,
    },

    /// Some stored paths do not start with the old prefix.
    #[error("{0}")]
    PrefixMismatchDetected(PrefixMismatch),

    /// Reading paths from a media table failed.
    #[error("couldn't obtain files from {table}:\n{source}")]
    QueryFailed {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Rewriting paths in a media table failed.
    #[error("couldn't replace {old} with {new} for media files in {table}: {source}")]
    UpdateFailed {
        table: String,
        old: String,
        new: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The transaction could not be committed.
    #[error("failed to commit changes to '{}': {source}", .path.display())]
    CommitFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

/// Convenience alias for results with [`MoverError`].
pub type Result<T> = std::result::Result<T, MoverError>;
