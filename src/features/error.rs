use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error while reading snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0:?} is reserved and can't be used as a category")]
    ReservedCategory(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize metadata to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SanitizeError {
    #[error("Metadata sanitization not supported for this file type: {0}")]
    Unsupported(String),

    #[error("Failed to re-encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to rewrite PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Failed to rewrite Office document: {0}")]
    Office(#[from] zip::result::ZipError),

    #[error("I/O error during sanitization")]
    Io(#[from] std::io::Error),
}
