pub mod error;
pub mod export;
pub mod format;
pub mod privacy;
pub mod report;
pub mod sanitize;
