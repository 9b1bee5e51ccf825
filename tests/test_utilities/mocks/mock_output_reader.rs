use pkgfacts::prelude::*;

/// Mock CapturedOutputReader for testing
pub struct MockOutputReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockOutputReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl CapturedOutputReader for MockOutputReader {
    fn read_output(&self, _source: &OutputSource) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock output read failure");
        }
        Ok(self.content.clone())
    }
}
