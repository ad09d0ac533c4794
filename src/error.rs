use thiserror::Error;

/// The primary error type for the metadata-compare crate.
#[derive(Error, Debug)]
pub enum MetadataCompareError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // --- Module Errors ---
    #[error("Snapshot loading failed: {0}")]
    Snapshot(#[from] crate::features::error::SnapshotError),

    #[error("Metadata export failed: {0}")]
    Export(#[from] crate::features::error::ExportError),

    #[error("Metadata sanitization failed: {0}")]
    Sanitize(#[from] crate::features::error::SanitizeError),
}
