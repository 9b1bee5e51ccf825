use pkgfacts::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock SnapshotReader serving in-memory documents by path
#[derive(Default)]
pub struct MockSnapshotReader {
    documents: HashMap<PathBuf, FactsDocument>,
}

impl MockSnapshotReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, document: FactsDocument) -> Self {
        self.documents.insert(PathBuf::from(path), document);
        self
    }
}

impl SnapshotReader for MockSnapshotReader {
    fn read_document(&self, path: &Path) -> Result<FactsDocument> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock snapshot not found: {}", path.display()))
    }
}
