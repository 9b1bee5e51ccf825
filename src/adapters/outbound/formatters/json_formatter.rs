use crate::application::dto::DialectDiff;
use crate::package_listing::domain::{FactsDocument, PackageSnapshot, TOOL_NAME};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct DiffDocument<'a> {
    tool: &'static str,
    tool_version: &'static str,
    generated_at: String,
    diffs: &'a [DialectDiff],
}

/// JsonFormatter adapter emitting pretty-printed JSON
///
/// Snapshots are written as a `FactsDocument`, the same shape
/// `SnapshotReader` accepts back for `diff`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for JsonFormatter {
    fn format_snapshots(&self, snapshots: &[PackageSnapshot]) -> Result<String> {
        let document = FactsDocument::new(snapshots.to_vec());
        serde_json::to_string_pretty(&document).map_err(Into::into)
    }

    fn format_diff(&self, diffs: &[DialectDiff]) -> Result<String> {
        let document = DiffDocument {
            tool: TOOL_NAME,
            tool_version: env!("CARGO_PKG_VERSION"),
            generated_at: chrono::Utc::now().to_rfc3339(),
            diffs,
        };
        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
