use crate::package_listing::domain::PackageSnapshot;
use crate::package_listing::services::PackageSetDiff;
use serde::Serialize;

/// FactsResponse - snapshots produced by the parse and collect use cases
#[derive(Debug, Clone)]
pub struct FactsResponse {
    pub snapshots: Vec<PackageSnapshot>,
}

impl FactsResponse {
    pub fn new(snapshots: Vec<PackageSnapshot>) -> Self {
        Self { snapshots }
    }

    pub fn package_count(&self) -> usize {
        self.snapshots.iter().map(|s| s.packages.len()).sum()
    }
}

/// Differences for one dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialectDiff {
    pub dialect: String,
    #[serde(flatten)]
    pub diff: PackageSetDiff,
}

/// DiffResponse - result of the diff use case
#[derive(Debug, Clone)]
pub struct DiffResponse {
    pub diffs: Vec<DialectDiff>,
}

impl DiffResponse {
    pub fn new(diffs: Vec<DialectDiff>) -> Self {
        Self { diffs }
    }

    /// True when any dialect has added, removed, or changed packages
    pub fn has_changes(&self) -> bool {
        self.diffs.iter().any(|d| !d.diff.is_empty())
    }
}
