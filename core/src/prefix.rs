//! Path prefix rules.
//!
//! Validation is prefix-anchored: a path conforms only if it starts with the
//! old prefix byte for byte. The rewrite is SQLite's `replace()`, which swaps
//! the old prefix wherever it occurs. The two only agree when the old prefix
//! never appears past the start of a path.

use std::fmt;

/// Maximum number of offending paths listed in a [`PrefixMismatch`].
pub const SAMPLE_LIMIT: usize = 50;

/// The old and new path prefix supplied by the caller.
///
/// No normalization is applied: trailing separators, case and Unicode form
/// are compared exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPair {
    pub old: String,
    pub new: String,
}

impl PrefixPair {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Paths in one table that do not start with the old prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMismatch {
    /// Table the paths were found in.
    pub table: String,
    /// Total number of offending paths.
    pub count: usize,
    /// At most [`SAMPLE_LIMIT`] offending paths, in query order.
    pub samples: Vec<String>,
}

impl PrefixMismatch {
    /// Builds a mismatch report from every offending path of a table.
    ///
    /// Returns `None` when `paths` is empty.
    pub fn from_paths(table: impl Into<String>, mut paths: Vec<String>) -> Option<Self> {
        if paths.is_empty() {
            return None;
        }
        let count = paths.len();
        paths.truncate(SAMPLE_LIMIT);
        Some(Self {
            table: table.into(),
            count,
            samples: paths,
        })
    }

    /// Returns `true` if some offending paths were left out of `samples`.
    pub fn is_trimmed(&self) -> bool {
        self.count > self.samples.len()
    }
}

impl fmt::Display for PrefixMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "detected {} files with different prefix in {}:\n{}",
            self.count,
            self.table,
            self.samples.join("\n")
        )?;
        if self.is_trimmed() {
            write!(f, "\n\n ... (output trimmed) ...\n")?;
        }
        Ok(())
    }
}
