use std::path::PathBuf;

/// DiffRequest - request DTO for comparing two facts documents
#[derive(Debug, Clone)]
pub struct DiffRequest {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    /// Restrict the comparison to one dialect
    pub dialect: Option<String>,
}

impl DiffRequest {
    pub fn new(old_path: PathBuf, new_path: PathBuf, dialect: Option<String>) -> Self {
        Self {
            old_path,
            new_path,
            dialect,
        }
    }
}
