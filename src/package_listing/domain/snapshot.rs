use super::PackageSet;
use serde::{Deserialize, Serialize};

/// Tool name recorded in every facts document
pub const TOOL_NAME: &str = "pkgfacts";

/// PackageSet stamped with where and when it was collected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSnapshot {
    pub dialect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub collected_at: String,
    pub packages: PackageSet,
    /// Non-blank lines that did not match the dialect pattern
    #[serde(default)]
    pub skipped_lines: usize,
}

impl PackageSnapshot {
    pub fn new(
        dialect: String,
        directory: Option<String>,
        packages: PackageSet,
        skipped_lines: usize,
    ) -> Self {
        Self {
            dialect,
            directory,
            collected_at: chrono::Utc::now().to_rfc3339(),
            packages,
            skipped_lines,
        }
    }
}

/// Top-level JSON document holding one snapshot per dialect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsDocument {
    pub tool: String,
    pub tool_version: String,
    pub generated_at: String,
    pub snapshots: Vec<PackageSnapshot>,
}

impl FactsDocument {
    pub fn new(snapshots: Vec<PackageSnapshot>) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            snapshots,
        }
    }

    /// Finds the snapshot for a dialect (the last one wins if repeated)
    pub fn snapshot(&self, dialect: &str) -> Option<&PackageSnapshot> {
        self.snapshots.iter().rev().find(|s| s.dialect == dialect)
    }
}
