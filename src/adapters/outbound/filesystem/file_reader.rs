use crate::package_listing::domain::FactsDocument;
use crate::ports::outbound::{CapturedOutputReader, OutputSource, SnapshotReader};
use crate::shared::error::FactsError;
use crate::shared::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading captured output and snapshots
///
/// Implements both CapturedOutputReader (plain text, or stdin) and
/// SnapshotReader (JSON facts documents).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = fs::symlink_metadata(path).map_err(|e| read_error(path, e.to_string()))?;

        if metadata.is_symlink() {
            return Err(read_error(
                path,
                "Security: path is a symbolic link. For security reasons, symbolic links are not allowed."
                    .to_string(),
            ));
        }

        if !metadata.is_file() {
            return Err(read_error(path, "Not a regular file".to_string()));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(read_error(
                path,
                format!(
                    "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }

        fs::read(path).map_err(|e| read_error(path, e.to_string()))
    }

    /// Reads stdin up to the size limit; larger input is an error, not truncated
    fn read_stdin(&self) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        std::io::stdin()
            .take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read list output from stdin: {}", e))?;

        if content.len() as u64 > MAX_FILE_SIZE {
            anyhow::bail!(
                "List output on stdin exceeds the maximum allowed size of {} bytes",
                MAX_FILE_SIZE
            );
        }
        Ok(content)
    }
}

fn read_error(path: &Path, details: String) -> anyhow::Error {
    FactsError::FileReadError {
        path: path.to_path_buf(),
        details,
    }
    .into()
}

/// Captured output may hold bytes in any encoding; invalid UTF-8 is
/// replaced so that unreadable lines are simply skipped by the parser.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

impl CapturedOutputReader for FileSystemReader {
    fn read_output(&self, source: &OutputSource) -> Result<String> {
        match source {
            OutputSource::Stdin => self.read_stdin().map(decode_lossy),
            OutputSource::File(path) => self.safe_read_bytes(path).map(decode_lossy),
        }
    }
}

impl SnapshotReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<FactsDocument> {
        let content = self.safe_read_bytes(path)?;
        serde_json::from_slice(&content).map_err(|e| {
            FactsError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
