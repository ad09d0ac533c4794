//! The metadata snapshot model: categories, field maps and JSON ingestion.
mod category;
mod structs;

pub use category::{Category, category_title};
pub use structs::{FILE_NAME_KEY, FieldMap, MetadataSnapshot, is_reserved_name, stringify_value};
