//! # Metadata Compare
//!
//! Compare, export and sanitize the metadata extracted from files.
//!
//! The crate works on [`MetadataSnapshot`]s: everything extracted from one file,
//! grouped into categories (`general`, `exif`, `document`, `system`, `media`,
//! `location`) of label/value string fields. Extraction itself is left to the
//! parsing library of your choice; snapshots can be built in code or loaded from
//! the JSON a metadata viewer exports.
//!
//! ## Key Features
//!
//! - **Diff Engine**: Classifies every field of two snapshots as added, removed, changed or unchanged.
//! - **Export**: Renders a snapshot as JSON, plain text, CSV or XML.
//! - **Reports**: Forensic, comparison and privacy reports in plain text.
//! - **Privacy**: Flags fields that identify people or places (authors, GPS, user agents).
//! - **Sanitization**: Strips embedded metadata from images, PDF files and Office documents.
//!
//! ## Usage
//!
//! ```rust
//! use metadata_compare::{DiffEntry, MetadataComparer, MetadataSnapshot};
//!
//! let left = MetadataSnapshot::new()
//!     .with_field("general", "Name", "a.png")
//!     .with_field("general", "Size", "10KB");
//! let right = MetadataSnapshot::new()
//!     .with_field("general", "Name", "a.png")
//!     .with_field("general", "Size", "20KB")
//!     .with_field("general", "New", "x");
//!
//! let comparer = MetadataComparer::builder().build();
//! let diff = comparer.compare(&left, &right);
//!
//! assert_eq!(diff.entry("general", "Name"), Some(&DiffEntry::Unchanged("a.png".into())));
//! assert_eq!(
//!     diff.entry("general", "Size"),
//!     Some(&DiffEntry::Changed("10KB".into(), "20KB".into()))
//! );
//! assert_eq!(diff.entry("general", "New"), Some(&DiffEntry::Added("x".into())));
//! println!("{}", diff.summary());
//! ```

mod comparer;
pub mod diff;
mod error;
pub mod features;
pub mod snapshot;

pub use comparer::MetadataComparer;
pub use diff::{
    CategoryDiff, DiffEntry, DiffResult, DiffSide, DiffStatus, DiffSummary, Highlight, compare,
    compare_many,
};
pub use error::MetadataCompareError;
pub use features::error::{ExportError, SanitizeError, SnapshotError};
pub use features::export::ExportFormat;
pub use features::privacy::SensitiveField;
pub use features::report::ReportKind;
pub use features::sanitize::{SanitizeKind, sanitize};
pub use snapshot::{Category, FieldMap, MetadataSnapshot};
