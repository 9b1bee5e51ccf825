/// CollectRequest - request DTO for running list commands locally
#[derive(Debug, Clone)]
pub struct CollectRequest {
    /// Dialect ids to collect, in output order
    pub dialects: Vec<String>,
    /// Directory to change into before listing
    pub directory: Option<String>,
}

impl CollectRequest {
    pub fn new(dialects: Vec<String>, directory: Option<String>) -> Self {
        Self {
            dialects,
            directory,
        }
    }

    /// Dialect ids with repeats removed, first occurrence kept
    pub fn unique_dialects(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.dialects
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
