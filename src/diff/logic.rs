use crate::diff::structs::{CategoryDiff, DiffEntry, DiffResult};
use crate::snapshot::{FieldMap, MetadataSnapshot};
use rayon::prelude::*;

/// Classifies every field of the listed categories as added, removed, changed or
/// unchanged between `left` and `right`.
///
/// Categories that are not listed are ignored, even if both snapshots have them.
/// A listed category missing from a snapshot counts as empty, so every listed
/// category is present in the result. Values are compared as exact strings.
pub fn compare<S: AsRef<str>>(
    categories: &[S],
    left: &MetadataSnapshot,
    right: &MetadataSnapshot,
) -> DiffResult {
    let mut result = DiffResult::default();
    for name in categories.iter().map(AsRef::as_ref) {
        if result.contains_category(name) {
            continue;
        }
        let diff = compare_fields(left.category(name), right.category(name));
        result.insert_category(name.to_string(), diff);
    }

    log::debug!(
        "Compared {} categories of {:?} and {:?}: {}",
        categories.len(),
        left.file_name,
        right.file_name,
        result.summary()
    );
    result
}

/// Left keys in their original order, then the keys only the right side has.
fn compare_fields(left: Option<&FieldMap>, right: Option<&FieldMap>) -> CategoryDiff {
    let capacity = left.map_or(0, FieldMap::len) + right.map_or(0, FieldMap::len);
    let mut diff = CategoryDiff::with_capacity(capacity);

    for (key, old) in left.into_iter().flatten() {
        let entry = match right.and_then(|fields| fields.get(key)) {
            None => DiffEntry::Removed(old.clone()),
            Some(new) if new != old => DiffEntry::Changed(old.clone(), new.clone()),
            Some(_) => DiffEntry::Unchanged(old.clone()),
        };
        diff.insert(key.clone(), entry);
    }

    for (key, new) in right.into_iter().flatten() {
        if left.is_none_or(|fields| !fields.contains_key(key)) {
            diff.insert(key.clone(), DiffEntry::Added(new.clone()));
        }
    }

    diff
}

/// Compares `baseline` against each of `others` in parallel.
///
/// The results line up with `others`: `result[i]` is `compare(categories, baseline, &others[i])`.
pub fn compare_many<S: AsRef<str> + Sync>(
    categories: &[S],
    baseline: &MetadataSnapshot,
    others: &[MetadataSnapshot],
) -> Vec<DiffResult> {
    others
        .par_iter()
        .map(|other| compare(categories, baseline, other))
        .collect()
}
