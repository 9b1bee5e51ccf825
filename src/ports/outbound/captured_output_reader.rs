use crate::shared::Result;
use std::path::PathBuf;

/// Where previously captured list output comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSource {
    Stdin,
    File(PathBuf),
}

impl std::fmt::Display for OutputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputSource::Stdin => write!(f, "stdin"),
            OutputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// CapturedOutputReader port for reading list output captured elsewhere
pub trait CapturedOutputReader {
    /// Reads the raw text of a captured list command output
    ///
    /// # Errors
    /// Returns an error if the source cannot be read
    fn read_output(&self, source: &OutputSource) -> Result<String>;
}
