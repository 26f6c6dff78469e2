//! Transactional media path rewrite for Shotwell catalogs.
//!
//! When a photo library moves on disk, Shotwell's SQLite catalog still
//! points at the old location. [`PrefixRewriter`] swaps the old path prefix
//! for the new one in every media table, after checking that the file is a
//! supported catalog and that every stored path actually starts with the
//! old prefix.
//!
//! # Architecture
//!
//! - **`backup`** — timestamped copy of the catalog taken before any access
//! - **`catalog`** — the individual SQL statements (version, check, rewrite)
//! - **`rewriter`** — the procedure wiring them into one transaction
//!
//! # Quick start
//!
//! ```no_run
//! use shotwell_mover_core::{PrefixPair, RewriteOptions};
//! use shotwell_mover_sqlite::PrefixRewriter;
//!
//! let options = RewriteOptions {
//!     backup: false,
//!     ..RewriteOptions::default()
//! };
//! let report = PrefixRewriter::new("photo.db", options)
//!     .run(&PrefixPair::new("/home/me/Pictures", "/srv/photos"))
//!     .unwrap();
//! for table in &report.tables {
//!     println!("{}: {} rows", table.table, table.rows_updated);
//! }
//! ```

mod backup;
mod catalog;
mod error;
mod rewriter;

pub use backup::{backup_database, backup_path_for};
pub use catalog::{find_mismatched_paths, read_schema_version, rewrite_paths};
pub use error::{MoverError, Result};
pub use rewriter::{PrefixRewriter, RewriteReport, TableRewrite};
