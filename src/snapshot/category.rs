use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed groupings a snapshot sorts its fields into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Exif,
    Document,
    System,
    Media,
    Location,
    Hex,
}

impl Category {
    /// Every category that takes part in a comparison. `Hex` is a raw byte preview
    /// and is left out on purpose.
    pub const COMPARABLE: [Self; 6] = [
        Self::General,
        Self::Exif,
        Self::Document,
        Self::System,
        Self::Media,
        Self::Location,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Exif => "exif",
            Self::Document => "document",
            Self::System => "system",
            Self::Media => "media",
            Self::Location => "location",
            Self::Hex => "hex",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "general" => Some(Self::General),
            "exif" => Some(Self::Exif),
            "document" => Some(Self::Document),
            "system" => Some(Self::System),
            "media" => Some(Self::Media),
            "location" => Some(Self::Location),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }

    /// Category names of [`Category::COMPARABLE`], as owned strings.
    pub fn comparable_names() -> Vec<String> {
        Self::COMPARABLE
            .iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capitalizes the first character of a category name (`exif` -> `Exif`).
pub fn category_title(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
