use crate::application::dto::{DiffRequest, DiffResponse, DialectDiff};
use crate::package_listing::domain::{FactsDocument, PackageSet};
use crate::package_listing::services::PackageSetDiff;
use crate::ports::outbound::{ProgressReporter, SnapshotReader};
use crate::shared::error::FactsError;
use crate::shared::Result;

/// DiffSnapshotsUseCase - compares two facts documents dialect by dialect
///
/// # Type Parameters
/// * `SR` - SnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct DiffSnapshotsUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> DiffSnapshotsUseCase<SR, PR>
where
    SR: SnapshotReader,
    PR: ProgressReporter,
{
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
        }
    }

    /// Diffs every dialect present in either document, or only `request.dialect`
    ///
    /// A dialect missing from one side is compared against an empty set.
    pub fn execute(&self, request: DiffRequest) -> Result<DiffResponse> {
        self.progress_reporter.report(&format!(
            "📖 Comparing {} -> {}",
            request.old_path.display(),
            request.new_path.display()
        ));

        let old = self.snapshot_reader.read_document(&request.old_path)?;
        let new = self.snapshot_reader.read_document(&request.new_path)?;

        let dialects = match request.dialect {
            Some(dialect) => {
                if old.snapshot(&dialect).is_none() && new.snapshot(&dialect).is_none() {
                    return Err(FactsError::Validation {
                        message: format!("Neither snapshot contains dialect '{}'", dialect),
                    }
                    .into());
                }
                vec![dialect]
            }
            None => Self::dialects_in(&old, &new),
        };

        let empty = PackageSet::new();
        let diffs: Vec<DialectDiff> = dialects
            .into_iter()
            .map(|dialect| {
                let before = old.snapshot(&dialect).map_or(&empty, |s| &s.packages);
                let after = new.snapshot(&dialect).map_or(&empty, |s| &s.packages);
                DialectDiff {
                    diff: PackageSetDiff::between(before, after),
                    dialect,
                }
            })
            .collect();

        let response = DiffResponse::new(diffs);
        let changes: usize = response.diffs.iter().map(|d| d.diff.change_count()).sum();
        self.progress_reporter
            .report_completion(&format!("✅ {} change(s) detected", changes));

        Ok(response)
    }

    /// Dialects of `old` followed by those only in `new`, without repeats
    fn dialects_in(old: &FactsDocument, new: &FactsDocument) -> Vec<String> {
        let mut dialects: Vec<String> = Vec::new();
        for snapshot in old.snapshots.iter().chain(new.snapshots.iter()) {
            if !dialects.contains(&snapshot.dialect) {
                dialects.push(snapshot.dialect.clone());
            }
        }
        dialects
    }
}
