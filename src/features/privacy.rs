use crate::snapshot::{Category, MetadataSnapshot};
use serde::{Deserialize, Serialize};

/// Key fragments that mark a field as personally identifying.
pub const DEFAULT_SENSITIVE_FIELDS: [&str; 7] = [
    "Author",
    "Creator",
    "User Agent",
    "GPSLatitude",
    "GPSLongitude",
    "Creation Date",
    "Modification Date",
];

/// Categories scanned for sensitive fields. The location category is a derived
/// view of the EXIF GPS tags, which are already covered through `exif`.
pub const PRIVACY_CATEGORIES: [Category; 5] = [
    Category::General,
    Category::Exif,
    Category::Document,
    Category::System,
    Category::Media,
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveField {
    pub category: Category,
    pub key: String,
    pub value: String,
}

/// Finds every field whose key contains one of `patterns` (case sensitive).
pub fn find_sensitive_fields<S: AsRef<str>>(
    snapshot: &MetadataSnapshot,
    patterns: &[S],
) -> Vec<SensitiveField> {
    PRIVACY_CATEGORIES
        .iter()
        .filter_map(|&category| {
            snapshot
                .category(category.as_str())
                .map(|fields| (category, fields))
        })
        .flat_map(|(category, fields)| {
            fields
                .iter()
                .filter(|(key, _)| {
                    patterns
                        .iter()
                        .any(|pattern| key.contains(pattern.as_ref()))
                })
                .map(move |(key, value)| SensitiveField {
                    category,
                    key: key.clone(),
                    value: value.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_finds_document_and_exif_fields() {
        let snapshot = MetadataSnapshot::from_value(&json!({
            "general": { "File Name": "holiday.jpg" },
            "exif": {
                "Make": "Google",
                "GPSLatitude": "[52,22,45.08]",
                "GPSLongitude": "[4,53,57.95]"
            },
            "document": { "Author": "Jane Doe", "Title": "Notes" },
            "system": { "User Agent": "Mozilla/5.0" },
            "location": { "Latitude": "52.379189" }
        }));

        let found = find_sensitive_fields(&snapshot, &DEFAULT_SENSITIVE_FIELDS);
        let keys: Vec<(Category, &str)> = found
            .iter()
            .map(|field| (field.category, field.key.as_str()))
            .collect();

        assert_eq!(
            keys,
            vec![
                (Category::Exif, "GPSLatitude"),
                (Category::Exif, "GPSLongitude"),
                (Category::Document, "Author"),
                (Category::System, "User Agent"),
            ]
        );
        assert_eq!(found[2].value, "Jane Doe");
    }

    #[test]
    fn test_matches_are_substrings_and_case_sensitive() {
        let snapshot = MetadataSnapshot::new()
            .with_field("document", "dc:creator", "jane")
            .with_field("document", "CreatorTool", "Word")
            .with_field("document", "PDF Creation Date", "D:20240101");

        let found = find_sensitive_fields(&snapshot, &DEFAULT_SENSITIVE_FIELDS);
        let keys: Vec<&str> = found.iter().map(|f| f.key.as_str()).collect();

        assert_eq!(keys, vec!["CreatorTool", "PDF Creation Date"]);
    }

    #[test]
    fn test_custom_patterns() {
        let snapshot = MetadataSnapshot::new()
            .with_field("exif", "SerialNumber", "123456")
            .with_field("exif", "Author", "Jane");

        let found = find_sensitive_fields(&snapshot, &["Serial"]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "SerialNumber");
    }

    #[test]
    fn test_clean_snapshot_has_no_findings() {
        let snapshot = MetadataSnapshot::new().with_field("media", "Duration", "1m 5s");
        assert!(find_sensitive_fields(&snapshot, &DEFAULT_SENSITIVE_FIELDS).is_empty());
    }
}
