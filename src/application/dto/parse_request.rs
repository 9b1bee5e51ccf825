use crate::ports::outbound::OutputSource;

/// ParseRequest - request DTO for parsing captured list output
#[derive(Debug, Clone)]
pub struct ParseRequest {
    pub dialect: String,
    pub source: OutputSource,
    /// Directory the output was captured in, recorded in the snapshot
    pub directory: Option<String>,
}

impl ParseRequest {
    pub fn new(dialect: String, source: OutputSource, directory: Option<String>) -> Self {
        Self {
            dialect,
            source,
            directory,
        }
    }
}
