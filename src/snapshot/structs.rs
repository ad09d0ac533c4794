use crate::features::error::SnapshotError;
use crate::snapshot::category::Category;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Field label -> stringified field value, in extraction order.
pub type FieldMap = IndexMap<String, String>;

/// JSON key holding the file name next to the categories.
pub const FILE_NAME_KEY: &str = "fileName";

/// Names that sit next to the categories in the JSON shape and so can't be
/// used as a category themselves.
pub fn is_reserved_name(name: &str) -> bool {
    name == FILE_NAME_KEY || name == Category::Hex.as_str()
}

/// All extracted metadata for one file, grouped by category.
///
/// Categories are keyed by name rather than by [`Category`] so that snapshots
/// coming from other extractors can carry groupings this crate does not know
/// about. The hex preview is kept apart from the field categories since it is a
/// single block of text and never takes part in a comparison.
///
/// `hex` and `fileName` are never category names, see [`is_reserved_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct MetadataSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    categories: IndexMap<String, FieldMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl MetadataSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Chainable form of [`MetadataSnapshot::insert`].
    ///
    /// A field under a reserved name (`hex`, `fileName`) is dropped with a warning;
    /// use [`MetadataSnapshot::insert`] to get the error instead.
    #[must_use]
    pub fn with_field(
        mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        if let Err(err) = self.insert(category, key, value) {
            log::warn!("Dropping field: {err}");
        }
        self
    }

    /// Sets a field, creating the category if needed. Returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::ReservedCategory`] for `hex` and `fileName`.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, SnapshotError> {
        Ok(self
            .ensure_category(category)?
            .insert(key.into(), value.into()))
    }

    /// Registers a category with no fields (e.g. a document section of an image).
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::ReservedCategory`] for `hex` and `fileName`.
    pub fn ensure_category(
        &mut self,
        category: impl Into<String>,
    ) -> Result<&mut FieldMap, SnapshotError> {
        let category = category.into();
        if is_reserved_name(&category) {
            return Err(SnapshotError::ReservedCategory(category));
        }
        Ok(self.categories.entry(category).or_default())
    }

    /// Field categories in snapshot order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &FieldMap)> {
        self.categories
            .iter()
            .map(|(name, fields)| (name.as_str(), fields))
    }

    pub fn category(&self, name: &str) -> Option<&FieldMap> {
        self.categories.get(name)
    }

    pub fn field(&self, category: &str, key: &str) -> Option<&str> {
        self.category(category)
            .and_then(|fields| fields.get(key))
            .map(String::as_str)
    }

    /// Number of fields across all categories.
    pub fn field_count(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Builds a snapshot from the JSON shape the viewer exports: an object of
    /// category objects, an optional `hex` string and an optional `fileName`.
    ///
    /// This never fails. Values that are not strings are stringified, and
    /// category entries that are not objects are skipped.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            log::warn!("Snapshot JSON is not an object, treating it as empty");
            return Self::default();
        };

        let mut snapshot = Self::default();
        for (name, entry) in object {
            match (name.as_str(), entry) {
                (FILE_NAME_KEY, Value::Null) => {}
                (FILE_NAME_KEY, value) => {
                    snapshot.file_name = Some(stringify_value(value));
                }
                (name, value) if name == Category::Hex.as_str() => {
                    snapshot.hex = Some(stringify_value(value));
                }
                (_, Value::Object(fields)) => {
                    let fields = fields
                        .iter()
                        .map(|(key, value)| (key.clone(), stringify_value(value)))
                        .collect();
                    snapshot.categories.insert(name.clone(), fields);
                }
                (_, other) => {
                    log::warn!("Skipping category {name:?}: expected an object, got {other}");
                }
            }
        }
        snapshot
    }

    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Reads a snapshot previously exported as JSON.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded snapshot from {} with {} fields",
            path.display(),
            snapshot.field_count()
        );
        Ok(snapshot)
    }
}

impl From<Value> for MetadataSnapshot {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Turns an extracted JSON value into the string that gets displayed and compared.
///
/// Strings are taken as-is. Everything else uses its compact JSON text, so a
/// number keeps its exact digits and a rational like `[72, 1]` stays readable.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_field_order_and_stringifies() {
        let value = json!({
            "fileName": "a.png",
            "general": {
                "File Name": "a.png",
                "File Size": "10.00 KB",
                "Last Modified Timestamp": 1_700_000_000_000_u64
            },
            "exif": {
                "XResolution": 72,
                "Flash": false,
                "Thumbnail": { "width": 160 },
                "Lens": null
            },
            "hex": "89 50 4e 47"
        });

        let snapshot = MetadataSnapshot::from_value(&value);

        assert_eq!(snapshot.file_name.as_deref(), Some("a.png"));
        assert_eq!(snapshot.hex.as_deref(), Some("89 50 4e 47"));
        assert_eq!(snapshot.categories().count(), 2, "hex is not a field category");

        let general: Vec<&str> = snapshot.categories["general"]
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            general,
            vec!["File Name", "File Size", "Last Modified Timestamp"]
        );
        assert_eq!(
            snapshot.field("general", "Last Modified Timestamp"),
            Some("1700000000000")
        );
        assert_eq!(snapshot.field("exif", "XResolution"), Some("72"));
        assert_eq!(snapshot.field("exif", "Flash"), Some("false"));
        assert_eq!(snapshot.field("exif", "Thumbnail"), Some(r#"{"width":160}"#));
        assert_eq!(snapshot.field("exif", "Lens"), Some("null"));
    }

    #[test]
    fn test_from_value_skips_malformed_categories() {
        let value = json!({
            "general": { "File Name": "a.png" },
            "exif": "EXIF library not loaded",
            "media": [1, 2, 3]
        });

        let snapshot = MetadataSnapshot::from_value(&value);

        assert_eq!(snapshot.categories().count(), 1);
        assert!(snapshot.category("exif").is_none());
        assert!(snapshot.category("media").is_none());
    }

    #[test]
    fn test_from_value_on_non_object_is_empty() {
        assert_eq!(MetadataSnapshot::from_value(&json!([1, 2])), MetadataSnapshot::new());
        assert_eq!(MetadataSnapshot::from_value(&json!("text")), MetadataSnapshot::new());
    }

    #[test]
    fn test_from_json_str_rejects_invalid_json() {
        let result = MetadataSnapshot::from_json_str("{ not json");
        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_empty_string_value_is_a_present_field() {
        let snapshot = MetadataSnapshot::new().with_field("document", "Title", "");
        assert_eq!(snapshot.field("document", "Title"), Some(""));
        assert_eq!(snapshot.field_count(), 1);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_serde_round_trip_preserves_shape() {
        let snapshot = MetadataSnapshot::new()
            .with_file_name("report.pdf")
            .with_field("general", "File Name", "report.pdf")
            .with_field("document", "Author", "Jane Doe");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            json!({
                "fileName": "report.pdf",
                "general": { "File Name": "report.pdf" },
                "document": { "Author": "Jane Doe" }
            })
        );

        let back: MetadataSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_insert_replaces_and_returns_previous() -> Result<(), SnapshotError> {
        let mut snapshot = MetadataSnapshot::new();
        assert_eq!(snapshot.insert("exif", "Make", "Canon")?, None);
        assert_eq!(
            snapshot.insert("exif", "Make", "Nikon")?,
            Some("Canon".to_string())
        );
        assert_eq!(snapshot.field("exif", "Make"), Some("Nikon"));

        snapshot.ensure_category("location")?;
        assert!(snapshot.category("location").is_some_and(IndexMap::is_empty));
        Ok(())
    }

    // --- Reserved names ---

    #[test]
    fn test_reserved_names_are_not_categories() {
        let mut snapshot = MetadataSnapshot::new();

        assert!(matches!(
            snapshot.insert("hex", "a", "b"),
            Err(SnapshotError::ReservedCategory(ref name)) if name == "hex"
        ));
        assert!(matches!(
            snapshot.ensure_category(FILE_NAME_KEY),
            Err(SnapshotError::ReservedCategory(ref name)) if name == "fileName"
        ));
        assert_eq!(snapshot.categories().count(), 0);
    }

    #[test]
    fn test_with_field_on_reserved_name_keeps_json_round_trip() {
        let mut snapshot = MetadataSnapshot::new()
            .with_field("hex", "a", "b")
            .with_field("fileName", "c", "d")
            .with_field("general", "File Name", "a.png");
        snapshot.hex = Some("ff".to_string());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"general":{"File Name":"a.png"},"hex":"ff"}"#,
            "No duplicate keys"
        );
        let back = MetadataSnapshot::from_json_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_non_string_file_name_is_not_a_category() {
        let snapshot = MetadataSnapshot::from_value(&json!({
            "fileName": { "oops": 1 },
            "general": { "File Name": "a.png" }
        }));

        assert_eq!(snapshot.file_name.as_deref(), Some(r#"{"oops":1}"#));
        assert_eq!(snapshot.categories().count(), 1);
        assert!(snapshot.category("fileName").is_none());

        let null_name = MetadataSnapshot::from_value(&json!({ "fileName": null }));
        assert_eq!(null_name, MetadataSnapshot::new());
    }
}
