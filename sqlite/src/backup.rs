//! Pre-run backup of the catalog file.
//!
//! The backup is a plain byte copy taken before any connection is opened,
//! so it is never part of the database transaction. It stays on disk when a
//! later step fails.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use filetime::FileTime;
use tracing::info;

use crate::error::{MoverError, Result};

/// Timestamp format of the backup suffix.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Returns `<db_path>.<YYYYMMDDHHMMSS>.backup` for the given time.
pub fn backup_path_for(db_path: &Path, at: DateTime<Local>) -> PathBuf {
    let mut name = OsString::from(db_path.as_os_str());
    name.push(format!(".{}.backup", at.format(BACKUP_TIMESTAMP_FORMAT)));
    PathBuf::from(name)
}

/// Copies the catalog next to itself with a timestamped name.
///
/// Permissions and access/modification times are carried over from the
/// source file. An existing file with the same name is overwritten.
///
/// # Errors
///
/// Returns [`MoverError::BackupFailed`] if the copy or the metadata update
/// fails.
pub fn backup_database(db_path: &Path) -> Result<PathBuf> {
    let backup = backup_path_for(db_path, Local::now());
    copy_with_times(db_path, &backup).map_err(|source| MoverError::BackupFailed {
        path: db_path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;
    info!(backup = %backup.display(), "backed up catalog");
    Ok(backup)
}

fn copy_with_times(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::copy(from, to)?;
    let metadata = fs::metadata(from)?;
    filetime::set_file_times(
        to,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
}
