use async_trait::async_trait;
use pkgfacts::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner returning canned output per command string
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    outputs: HashMap<String, CommandOutput>,
    pub executed: Arc<Mutex<Vec<String>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_output(command, stdout, "", 0)
    }

    pub fn with_output(mut self, command: &str, stdout: &str, stderr: &str, exit_code: i32) -> Self {
        self.outputs.insert(
            command.to_string(),
            CommandOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code: Some(exit_code),
            },
        );
        self
    }

    pub fn executed_commands(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        self.executed.lock().unwrap().push(command.to_string());
        match self.outputs.get(command) {
            Some(output) => Ok(output.clone()),
            None => anyhow::bail!("Mock runner has no output for: {}", command),
        }
    }
}
