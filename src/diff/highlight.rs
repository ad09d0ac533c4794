use crate::diff::structs::{DiffEntry, DiffResult};
use serde::{Deserialize, Serialize};

/// Which of the two compared snapshots a row is being rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffSide {
    Left,
    Right,
}

/// Styling hint for one rendered field in a side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Highlight {
    Same,
    Added,
    Removed,
    Changed,
}

impl Highlight {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Same => "diff-same",
            Self::Added => "diff-added",
            Self::Removed => "diff-removed",
            Self::Changed => "diff-changed",
        }
    }
}

impl DiffEntry {
    /// How to style this field on `side`.
    ///
    /// An added field is only marked on the right, where it exists; a removed
    /// one only on the left.
    pub const fn highlight(&self, side: DiffSide) -> Option<Highlight> {
        match (self, side) {
            (Self::Unchanged(_), _) => Some(Highlight::Same),
            (Self::Changed(..), _) => Some(Highlight::Changed),
            (Self::Added(_), DiffSide::Right) => Some(Highlight::Added),
            (Self::Removed(_), DiffSide::Left) => Some(Highlight::Removed),
            (Self::Added(_), DiffSide::Left) | (Self::Removed(_), DiffSide::Right) => None,
        }
    }
}

impl DiffResult {
    /// Styling for field `key` of `category` on `side`; `None` when the field was
    /// not compared or needs no marking on that side.
    pub fn highlight(&self, category: &str, key: &str, side: DiffSide) -> Option<Highlight> {
        self.entry(category, key)
            .and_then(|entry| entry.highlight(side))
    }
}
