use crate::application::dto::DialectDiff;
use crate::package_listing::domain::PackageSnapshot;
use crate::shared::Result;

/// SnapshotFormatter port for rendering facts
///
/// This port abstracts the formatting logic for different output
/// formats (JSON, Markdown).
pub trait SnapshotFormatter {
    /// Formats collected or parsed snapshots
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_snapshots(&self, snapshots: &[PackageSnapshot]) -> Result<String>;

    /// Formats the per-dialect differences between two documents
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_diff(&self, diffs: &[DialectDiff]) -> Result<String>;
}
