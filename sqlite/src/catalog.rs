//! Statements run against a Shotwell catalog.
//!
//! Each function takes a plain [`Connection`] so it can run inside the
//! caller's transaction (a `rusqlite::Transaction` derefs to one).

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, params};
use shotwell_mover_core::{MediaTableSpec, PrefixPair, SchemaVersion, VERSION_COLUMN, VERSION_TABLE};
use tracing::debug;

use crate::error::{MoverError, Result};

/// Reads the catalog schema version.
///
/// # Errors
///
/// Returns [`MoverError::NotACatalogDatabase`] if the version table cannot
/// be queried, or [`MoverError::CorruptedMetadata`] unless the query yields
/// exactly one row with one column. The value itself is not judged here; a
/// non-integer comes back as [`SchemaVersion::Other`].
pub fn read_schema_version(conn: &Connection, db_path: &Path) -> Result<SchemaVersion> {
    let not_a_catalog = |err: rusqlite::Error| {
        debug!(error = %err, "version table query failed");
        MoverError::NotACatalogDatabase {
            path: db_path.to_path_buf(),
        }
    };
    let corrupted = || MoverError::CorruptedMetadata {
        path: db_path.to_path_buf(),
    };

    let sql = format!("SELECT {VERSION_COLUMN} FROM {VERSION_TABLE}");
    let mut stmt = conn.prepare(&sql).map_err(not_a_catalog)?;
    if stmt.column_count() != 1 {
        return Err(corrupted());
    }
    let rows = stmt
        .query_map([], |row| row.get::<_, Value>(0))
        .map_err(not_a_catalog)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(not_a_catalog)?;

    let mut rows = rows.into_iter();
    match (rows.next(), rows.next()) {
        (Some(Value::Integer(version)), None) => Ok(SchemaVersion::Number(version)),
        (Some(other), None) => Ok(SchemaVersion::Other(display_value(other))),
        _ => Err(corrupted()),
    }
}

/// Returns every non-NULL path in `spec`'s column that does not start with
/// `old_prefix`, in table order.
///
/// The comparison is an exact prefix match; `LIKE` wildcards and case
/// folding play no part.
pub fn find_mismatched_paths(
    conn: &Connection,
    spec: &MediaTableSpec,
    old_prefix: &str,
) -> Result<Vec<String>> {
    let query_failed = |source| MoverError::QueryFailed {
        table: spec.table.to_string(),
        source,
    };

    let sql = format!(
        "SELECT {column} FROM {table} WHERE instr({column}, ?1) != 1",
        table = spec.table,
        column = spec.column,
    );
    let mut stmt = conn.prepare(&sql).map_err(query_failed)?;
    let paths = stmt
        .query_map([old_prefix], |row| row.get::<_, Value>(0))
        .map_err(query_failed)?
        .map(|value| value.map(display_value))
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(query_failed)?;

    debug!(table = spec.table, mismatched = paths.len(), "checked path prefixes");
    Ok(paths)
}

/// Replaces every occurrence of the old prefix in `spec`'s column and
/// returns the number of rows touched.
pub fn rewrite_paths(conn: &Connection, spec: &MediaTableSpec, prefixes: &PrefixPair) -> Result<usize> {
    let sql = format!(
        "UPDATE {table} SET {column} = replace({column}, ?1, ?2)",
        table = spec.table,
        column = spec.column,
    );
    let rows = conn
        .execute(&sql, params![prefixes.old, prefixes.new])
        .map_err(|source| MoverError::UpdateFailed {
            table: spec.table.to_string(),
            old: prefixes.old.clone(),
            new: prefixes.new.clone(),
            source,
        })?;

    debug!(table = spec.table, rows, "rewrote paths");
    Ok(rows)
}

/// Renders a stored value as text for reports and messages.
fn display_value(value: Value) -> String {
    match value {
        Value::Text(text) => text,
        Value::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Value::Integer(n) => n.to_string(),
        Value::Real(n) => n.to_string(),
        Value::Null => "NULL".to_string(),
    }
}
