use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single field differs between the left and the right snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum DiffEntry {
    /// Only the right snapshot has the field.
    Added(String),
    /// Only the left snapshot has the field.
    Removed(String),
    /// Both have it with different values: `(left, right)`.
    Changed(String, String),
    Unchanged(String),
}

/// The variant of a [`DiffEntry`] without its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffStatus {
    Added,
    Removed,
    Changed,
    Unchanged,
}

impl DiffStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }

    /// One-character marker used in plain-text reports.
    pub const fn marker(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Changed => '~',
            Self::Unchanged => '=',
        }
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DiffEntry {
    pub const fn status(&self) -> DiffStatus {
        match self {
            Self::Added(_) => DiffStatus::Added,
            Self::Removed(_) => DiffStatus::Removed,
            Self::Changed(..) => DiffStatus::Changed,
            Self::Unchanged(_) => DiffStatus::Unchanged,
        }
    }

    /// The value in the left snapshot, if the field exists there.
    pub fn left(&self) -> Option<&str> {
        match self {
            Self::Added(_) => None,
            Self::Removed(old) | Self::Changed(old, _) | Self::Unchanged(old) => Some(old),
        }
    }

    /// The value in the right snapshot, if the field exists there.
    pub fn right(&self) -> Option<&str> {
        match self {
            Self::Removed(_) => None,
            Self::Added(new) | Self::Changed(_, new) | Self::Unchanged(new) => Some(new),
        }
    }

    pub const fn is_difference(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }

    /// The entry as it would be if the two snapshots were swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Added(new) => Self::Removed(new.clone()),
            Self::Removed(old) => Self::Added(old.clone()),
            Self::Changed(old, new) => Self::Changed(new.clone(), old.clone()),
            Self::Unchanged(value) => Self::Unchanged(value.clone()),
        }
    }
}

/// Field label -> diff entry for one category.
pub type CategoryDiff = IndexMap<String, DiffEntry>;

/// Per-category, per-field classification of two snapshots.
///
/// Categories appear in the order they were requested, fields in the order
/// produced by [`crate::diff::compare`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DiffResult {
    categories: IndexMap<String, CategoryDiff>,
}

impl DiffResult {
    pub(crate) fn insert_category(&mut self, name: String, diff: CategoryDiff) {
        self.categories.insert(name, diff);
    }

    pub(crate) fn contains_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryDiff> {
        self.categories.get(name)
    }

    pub fn entry(&self, category: &str, key: &str) -> Option<&DiffEntry> {
        self.category(category).and_then(|diff| diff.get(key))
    }

    /// Compared categories with their field diffs, in request order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryDiff)> {
        self.categories
            .iter()
            .map(|(name, diff)| (name.as_str(), diff))
    }

    /// Every `(category, field, entry)` triple.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &DiffEntry)> {
        self.categories().flat_map(|(category, diff)| {
            diff.iter()
                .map(move |(key, entry)| (category, key.as_str(), entry))
        })
    }

    pub fn summary(&self) -> DiffSummary {
        self.entries()
            .fold(DiffSummary::default(), |mut summary, (_, _, entry)| {
                summary.record(entry.status());
                summary
            })
    }

    pub fn has_differences(&self) -> bool {
        self.entries().any(|(_, _, entry)| entry.is_difference())
    }

    /// The result of comparing the same snapshots the other way around.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let categories = self
            .categories
            .iter()
            .map(|(name, diff)| {
                let diff = diff
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.reversed()))
                    .collect();
                (name.clone(), diff)
            })
            .collect();
        Self { categories }
    }
}

/// Entry counts per [`DiffStatus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    fn record(&mut self, status: DiffStatus) {
        match status {
            DiffStatus::Added => self.added += 1,
            DiffStatus::Removed => self.removed += 1,
            DiffStatus::Changed => self.changed += 1,
            DiffStatus::Unchanged => self.unchanged += 1,
        }
    }

    pub const fn differences(&self) -> usize {
        self.added + self.removed + self.changed
    }

    pub const fn total(&self) -> usize {
        self.differences() + self.unchanged
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unchanged, {} changed, {} added, {} removed",
            self.unchanged, self.changed, self.added, self.removed
        )
    }
}
