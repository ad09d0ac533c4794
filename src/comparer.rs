use crate::MetadataCompareError;
use crate::diff::{DiffResult, compare, compare_many};
use crate::features::export::{ExportFormat, export_snapshot};
use crate::features::privacy::{DEFAULT_SENSITIVE_FIELDS, SensitiveField, find_sensitive_fields};
use crate::features::report::{comparison_report, forensic_report, privacy_report};
use crate::snapshot::{Category, MetadataSnapshot};
use bon::bon;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Entry point for comparing and reporting on metadata snapshots.
///
/// Holds the settings shared by every operation, so it is meant to be built
/// once and reused. Use the builder:
/// ```rust
/// # use metadata_compare::{MetadataComparer, MetadataSnapshot, DiffEntry};
/// let comparer = MetadataComparer::builder()
///     .categories(vec!["general".to_string(), "exif".to_string()])
///     .build();
///
/// let left = MetadataSnapshot::new().with_field("exif", "Make", "Canon");
/// let right = MetadataSnapshot::new().with_field("exif", "Make", "Nikon");
/// let diff = comparer.compare(&left, &right);
///
/// assert_eq!(
///     diff.entry("exif", "Make"),
///     Some(&DiffEntry::Changed("Canon".into(), "Nikon".into()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MetadataComparer {
    categories: Vec<String>,
    sensitive_fields: Vec<String>,
    report_time: Option<DateTime<Utc>>,
}

#[bon]
impl MetadataComparer {
    /// Constructs a `MetadataComparer` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `categories: Vec<String>` - (Default: `general`, `exif`, `document`, `system`, `media`, `location`) The categories to compare, in output order. Anything else in a snapshot, such as the hex preview, is ignored.
    /// * `sensitive_fields: Vec<String>` - (Default: [`DEFAULT_SENSITIVE_FIELDS`]) Key fragments that the privacy scan flags.
    /// * `report_time: Option<DateTime<Utc>>` - A fixed "Generated on" time for reports. If `None`, the current time is used for each report.
    #[builder]
    pub fn new(
        #[builder(default = Category::comparable_names())] categories: Vec<String>,
        #[builder(default = DEFAULT_SENSITIVE_FIELDS.iter().map(ToString::to_string).collect())]
        sensitive_fields: Vec<String>,
        report_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            categories,
            sensitive_fields,
            report_time,
        }
    }
}

impl Default for MetadataComparer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MetadataComparer {
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn sensitive_fields(&self) -> &[String] {
        &self.sensitive_fields
    }

    fn now(&self) -> DateTime<Utc> {
        self.report_time.unwrap_or_else(Utc::now)
    }

    pub fn compare(&self, left: &MetadataSnapshot, right: &MetadataSnapshot) -> DiffResult {
        compare(&self.categories, left, right)
    }

    /// Compares `baseline` against every snapshot in `others`, in parallel.
    pub fn compare_many(
        &self,
        baseline: &MetadataSnapshot,
        others: &[MetadataSnapshot],
    ) -> Vec<DiffResult> {
        compare_many(&self.categories, baseline, others)
    }

    /// Loads two snapshots exported as JSON and compares them.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataCompareError::Snapshot`] if either file can't be read or
    /// isn't valid JSON.
    pub fn compare_files(
        &self,
        left: &Path,
        right: &Path,
    ) -> Result<DiffResult, MetadataCompareError> {
        let left = MetadataSnapshot::load(left)?;
        let right = MetadataSnapshot::load(right)?;
        Ok(self.compare(&left, &right))
    }

    pub fn export(
        &self,
        snapshot: &MetadataSnapshot,
        format: ExportFormat,
    ) -> Result<String, MetadataCompareError> {
        Ok(export_snapshot(snapshot, format)?)
    }

    pub fn forensic_report(&self, snapshot: &MetadataSnapshot) -> String {
        forensic_report(snapshot, self.now())
    }

    pub fn comparison_report(&self, left: &MetadataSnapshot, right: &MetadataSnapshot) -> String {
        let diff = self.compare(left, right);
        comparison_report(left, right, &diff, self.now())
    }

    pub fn find_sensitive_fields(&self, snapshot: &MetadataSnapshot) -> Vec<SensitiveField> {
        find_sensitive_fields(snapshot, &self.sensitive_fields)
    }

    pub fn privacy_report(&self, snapshot: &MetadataSnapshot) -> String {
        let findings = self.find_sensitive_fields(snapshot);
        log::debug!(
            "Privacy scan of {:?} found {} sensitive fields",
            snapshot.file_name,
            findings.len()
        );
        privacy_report(snapshot, &findings, self.now())
    }
}
