use crate::features::error::ExportError;
use crate::snapshot::{FieldMap, MetadataSnapshot, category_title};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::OnceLock;

static RE_INVALID_XML_NAME_CHAR: OnceLock<Regex> = OnceLock::new();
static RE_INVALID_XML_CHAR: OnceLock<Regex> = OnceLock::new();

/// Output formats for a single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
    Csv,
    Xml,
}

impl ExportFormat {
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
            Self::Csv => "text/csv",
            Self::Xml => "application/xml",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    /// Download name for an export of `file_name`, e.g. `photo.jpg_metadata.csv`.
    pub fn export_file_name(self, file_name: &str) -> String {
        format!("{file_name}_metadata.{}", self.extension())
    }
}

pub fn export_snapshot(
    snapshot: &MetadataSnapshot,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(snapshot)?,
        ExportFormat::Text => to_text(snapshot),
        ExportFormat::Csv => to_csv(snapshot),
        ExportFormat::Xml => to_xml(snapshot),
    };
    log::debug!(
        "Exported {} fields of {:?} as {format:?} ({} bytes)",
        snapshot.field_count(),
        snapshot.file_name,
        content.len()
    );
    Ok(content)
}

/// One `Title:` block per category with `key: value` lines, each block followed
/// by a blank line.
pub fn to_text(snapshot: &MetadataSnapshot) -> String {
    let mut text = String::new();
    for (name, fields) in snapshot.categories() {
        write_text_section(&mut text, name, fields);
    }
    text
}

pub(crate) fn write_text_section(out: &mut String, name: &str, fields: &FieldMap) {
    let _ = writeln!(out, "{}:", category_title(name));
    for (key, value) in fields {
        let _ = writeln!(out, "{key}: {value}");
    }
    out.push('\n');
}

pub fn to_csv(snapshot: &MetadataSnapshot) -> String {
    let mut csv = String::from("Category,Key,Value\n");
    for (name, fields) in snapshot.categories() {
        for (key, value) in fields {
            let _ = writeln!(
                csv,
                "{},{},{}",
                csv_cell(name),
                csv_cell(key),
                csv_cell(value)
            );
        }
    }
    csv
}

fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn to_xml(snapshot: &MetadataSnapshot) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<metadata>\n");
    for (name, fields) in snapshot.categories() {
        let category = xml_name(name);
        let _ = writeln!(xml, "  <{category}>");
        for (key, value) in fields {
            let element = xml_name(key);
            let _ = writeln!(xml, "    <{element}>{}</{element}>", xml_escape(value));
        }
        let _ = writeln!(xml, "  </{category}>");
    }
    xml.push_str("</metadata>");
    xml
}

/// Turns a field label into a usable element name: `Size (bytes)` -> `Size__bytes_`.
fn xml_name(label: &str) -> String {
    let re = RE_INVALID_XML_NAME_CHAR
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("valid regex"));
    let name = re.replace_all(label, "_");
    match name.chars().next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => name.into_owned(),
        _ => format!("_{name}"),
    }
}

/// Escapes markup and drops characters XML 1.0 can't carry at all, such as the
/// NUL padding of EXIF `UserComment`.
fn xml_escape(value: &str) -> String {
    let re = RE_INVALID_XML_CHAR.get_or_init(|| {
        Regex::new(r"[^\x09\x0A\x0D\x20-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]")
            .expect("valid regex")
    });
    re.replace_all(value, "")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
