use crate::package_listing::domain::FactsDocument;
use crate::shared::Result;
use std::path::Path;

/// SnapshotReader port for loading previously written facts documents
pub trait SnapshotReader {
    /// Reads a JSON facts document
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a facts document
    fn read_document(&self, path: &Path) -> Result<FactsDocument>;
}
