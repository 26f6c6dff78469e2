//! Catalog layout and rewrite rules for moving a Shotwell photo library.
//!
//! This crate holds everything about a prefix rewrite that does not need a
//! database connection:
//!
//! - [`MEDIA_TABLES`] — the fixed, ordered list of tables and path columns
//!   that reference media files.
//! - [`SchemaVersion`] and [`SUPPORTED_SCHEMA_VERSIONS`] — the schema
//!   version allow-list.
//! - [`PrefixPair`] and [`PrefixMismatch`] — the prefixes to swap and the
//!   mismatch report shown to users.
//! - [`RewriteOptions`] and [`default_catalog_path`] — run switches.
//!
//! # Example
//!
//! ```
//! use shotwell_mover_core::*;
//!
//! let pair = PrefixPair::new("/media/old", "/media/new");
//! let stored = ["/media/old/2019/a.jpg", "/home/me/b.jpg"];
//!
//! let offending: Vec<String> = stored
//!     .iter()
//!     .filter(|p| !p.starts_with(&pair.old))
//!     .map(|p| p.to_string())
//!     .collect();
//! let mismatch = PrefixMismatch::from_paths("PhotoTable", offending).unwrap();
//! assert_eq!(mismatch.count, 1);
//! assert!(SchemaVersion::Number(22).is_supported());
//! ```

mod options;
mod prefix;
mod tables;
mod version;

pub use options::{RewriteOptions, default_catalog_path};
pub use prefix::{PrefixMismatch, PrefixPair, SAMPLE_LIMIT};
pub use tables::{MEDIA_TABLES, MediaTableSpec, VERSION_COLUMN, VERSION_TABLE};
pub use version::{SUPPORTED_SCHEMA_VERSIONS, SchemaVersion, format_supported_versions};
