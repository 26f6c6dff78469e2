//! The prefix rewrite procedure.
//!
//! [`PrefixRewriter::run`] backs up the catalog, then performs every check
//! and update inside one `IMMEDIATE` transaction. The transaction is
//! committed only after all media tables were rewritten; any error rolls it
//! back explicitly before being returned, leaving the catalog file as it
//! was.
//!
//! # Example
//!
//! ```no_run
//! use shotwell_mover_core::{PrefixPair, RewriteOptions};
//! use shotwell_mover_sqlite::PrefixRewriter;
//!
//! let rewriter = PrefixRewriter::new("photo.db", RewriteOptions::default());
//! let report = rewriter
//!     .run(&PrefixPair::new("/media/old", "/media/new"))
//!     .unwrap();
//! println!("updated {} rows", report.total_rows());
//! ```

use std::path::PathBuf;

use rusqlite::{Connection, ErrorCode, OpenFlags, TransactionBehavior};
use shotwell_mover_core::{
    MEDIA_TABLES, PrefixMismatch, PrefixPair, RewriteOptions, SchemaVersion,
    format_supported_versions,
};
use tracing::{debug, info, warn};

use crate::backup::backup_database;
use crate::catalog::{find_mismatched_paths, read_schema_version, rewrite_paths};
use crate::error::{MoverError, Result};

/// Rewrites the media path prefix of one catalog file.
#[derive(Debug, Clone)]
pub struct PrefixRewriter {
    db_path: PathBuf,
    options: RewriteOptions,
}

impl PrefixRewriter {
    pub fn new(db_path: impl Into<PathBuf>, options: RewriteOptions) -> Self {
        Self {
            db_path: db_path.into(),
            options,
        }
    }

    /// Runs the whole procedure: backup, validation, rewrite, commit.
    ///
    /// Either every media table is rewritten and committed, or the catalog
    /// is left untouched and an error is returned. A backup taken before
    /// the failure stays on disk.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's [`MoverError`].
    pub fn run(&self, prefixes: &PrefixPair) -> Result<RewriteReport> {
        let backup_path = if self.options.backup {
            Some(backup_database(&self.db_path)?)
        } else {
            None
        };

        let mut conn = self.open()?;
        let (schema_version, tables) = self.run_in_transaction(&mut conn, prefixes)?;

        info!(
            db = %self.db_path.display(),
            old = %prefixes.old,
            new = %prefixes.new,
            "committed prefix rewrite"
        );
        Ok(RewriteReport {
            db_path: self.db_path.clone(),
            backup_path,
            schema_version,
            tables,
        })
    }

    /// Opens the catalog read-write; a missing file is an error rather than
    /// a new empty database.
    fn open(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Connection::open_with_flags(&self.db_path, flags).map_err(|source| self.open_error(source))
    }

    /// SQLite opens files lazily, so a file that is not a database at all
    /// only fails once the transaction begins. Both points report it the
    /// same way as a file without a version table.
    fn open_error(&self, source: rusqlite::Error) -> MoverError {
        if source.sqlite_error_code() == Some(ErrorCode::NotADatabase) {
            debug!(error = %source, "not an SQLite database");
            return MoverError::NotACatalogDatabase {
                path: self.db_path.clone(),
            };
        }
        MoverError::OpenFailed {
            path: self.db_path.clone(),
            source,
        }
    }

    fn run_in_transaction(
        &self,
        conn: &mut Connection,
        prefixes: &PrefixPair,
    ) -> Result<(SchemaVersion, Vec<TableRewrite>)> {
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|source| self.open_error(source))?;

        match self.apply(&tx, prefixes) {
            Ok(outcome) => {
                tx.commit().map_err(|source| MoverError::CommitFailed {
                    path: self.db_path.clone(),
                    source,
                })?;
                Ok(outcome)
            }
            Err(err) => {
                debug!(error = %err, "rolling back");
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "explicit rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Checks and rewrites; runs entirely inside the caller's transaction.
    fn apply(
        &self,
        conn: &Connection,
        prefixes: &PrefixPair,
    ) -> Result<(SchemaVersion, Vec<TableRewrite>)> {
        let schema_version = read_schema_version(conn, &self.db_path)?;
        debug!(%schema_version, "read catalog schema version");

        if self.options.schema_check && !schema_version.is_supported() {
            return Err(MoverError::UnsupportedSchemaVersion {
                found: schema_version,
                supported: format_supported_versions(),
            });
        }

        if !self.options.ignore_different_prefix {
            for spec in MEDIA_TABLES {
                let offending = find_mismatched_paths(conn, spec, &prefixes.old)?;
                if let Some(mismatch) = PrefixMismatch::from_paths(spec.table, offending) {
                    return Err(MoverError::PrefixMismatchDetected(mismatch));
                }
            }
        }

        let mut tables = Vec::with_capacity(MEDIA_TABLES.len());
        for spec in MEDIA_TABLES {
            let rows_updated = rewrite_paths(conn, spec, prefixes)?;
            tables.push(TableRewrite {
                table: spec.table,
                column: spec.column,
                rows_updated,
            });
        }
        Ok((schema_version, tables))
    }
}

/// Rows touched in one media table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRewrite {
    pub table: &'static str,
    pub column: &'static str,
    pub rows_updated: usize,
}

/// Summary of a committed rewrite.
#[derive(Debug, Clone)]
pub struct RewriteReport {
    /// Catalog that was rewritten.
    pub db_path: PathBuf,
    /// Backup taken before the run, if any.
    pub backup_path: Option<PathBuf>,
    /// Schema version found in the catalog.
    pub schema_version: SchemaVersion,
    /// Per-table results in processing order.
    pub tables: Vec<TableRewrite>,
}

impl RewriteReport {
    /// Total rows touched across all media tables.
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows_updated).sum()
    }
}
