//! Plain-text reports built from snapshots and diffs.
use crate::diff::{DiffEntry, DiffResult};
use crate::features::export::write_text_section;
use crate::features::privacy::SensitiveField;
use crate::snapshot::{Category, FieldMap, MetadataSnapshot, category_title};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const UNKNOWN_FILE_NAME: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    Forensic,
    Comparison,
    Privacy,
}

impl ReportKind {
    /// Download name of the report. `source` is the analyzed file's name and is
    /// not used for comparison reports, which cover two files.
    pub fn file_name(self, source: Option<&str>) -> String {
        let source = source.unwrap_or(UNKNOWN_FILE_NAME);
        match self {
            Self::Forensic => format!("{source}_forensic_report.txt"),
            Self::Comparison => "comparison_report.txt".to_string(),
            Self::Privacy => format!("{source}_privacy_report.txt"),
        }
    }
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2024-05-01T12:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn file_name(snapshot: &MetadataSnapshot) -> &str {
    snapshot.file_name.as_deref().unwrap_or(UNKNOWN_FILE_NAME)
}

/// Sections of the forensic report: caption, category, and whether the section
/// is printed even when the category is empty.
const FORENSIC_SECTIONS: [(&str, Category, bool); 5] = [
    ("General Metadata", Category::General, true),
    ("System Metadata", Category::System, true),
    ("EXIF Data", Category::Exif, false),
    ("Document Properties", Category::Document, false),
    ("Media Properties", Category::Media, false),
];

pub fn forensic_report(snapshot: &MetadataSnapshot, generated_at: DateTime<Utc>) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Forensic Metadata Report");
    let _ = writeln!(report, "Generated on: {}", format_timestamp(generated_at));
    let _ = writeln!(report, "File Name: {}", file_name(snapshot));
    report.push('\n');

    let empty = FieldMap::new();
    for (caption, category, always) in FORENSIC_SECTIONS {
        let fields = snapshot.category(category.as_str()).unwrap_or(&empty);
        if fields.is_empty() && !always {
            continue;
        }
        let _ = writeln!(report, "{caption}:");
        write_text_section(&mut report, category.as_str(), fields);
    }

    report.trim_end().to_string()
}

/// Lists every compared field with a status marker, followed by the counts.
///
/// ```text
/// = Name: a.png
/// ~ Size: 10KB -> 20KB
/// + New: x
/// - Old: y
/// ```
pub fn comparison_report(
    left: &MetadataSnapshot,
    right: &MetadataSnapshot,
    diff: &DiffResult,
    generated_at: DateTime<Utc>,
) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Metadata Comparison Report");
    let _ = writeln!(report, "Generated on: {}", format_timestamp(generated_at));
    let _ = writeln!(report, "Left: {}", file_name(left));
    let _ = writeln!(report, "Right: {}", file_name(right));
    report.push('\n');

    for (category, fields) in diff.categories().filter(|(_, fields)| !fields.is_empty()) {
        let _ = writeln!(report, "{}:", category_title(category));
        for (key, entry) in fields {
            let marker = entry.status().marker();
            let _ = match entry {
                DiffEntry::Changed(old, new) => writeln!(report, "{marker} {key}: {old} -> {new}"),
                DiffEntry::Added(value)
                | DiffEntry::Removed(value)
                | DiffEntry::Unchanged(value) => writeln!(report, "{marker} {key}: {value}"),
            };
        }
        report.push('\n');
    }

    let _ = write!(report, "Summary: {}", diff.summary());
    report
}

pub fn privacy_report(
    snapshot: &MetadataSnapshot,
    findings: &[SensitiveField],
    generated_at: DateTime<Utc>,
) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Privacy Report for {}", file_name(snapshot));
    let _ = writeln!(report, "Generated on: {}", format_timestamp(generated_at));
    report.push('\n');
    let _ = writeln!(report, "Sensitive Metadata Found:");

    if findings.is_empty() {
        let _ = writeln!(report, "No sensitive metadata detected.");
    }
    for field in findings {
        let _ = writeln!(
            report,
            "{} - {}: {}",
            category_title(field.category.as_str()),
            field.key,
            field.value
        );
    }
    report
}
