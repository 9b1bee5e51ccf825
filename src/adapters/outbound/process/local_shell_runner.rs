use crate::ports::outbound::{CommandOutput, CommandRunner};
use crate::shared::error::FactsError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default upper bound for a single list command
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// LocalShellRunner adapter running commands through `sh -c`
///
/// The child is killed if it outlives the timeout.
pub struct LocalShellRunner {
    shell: String,
    timeout: Duration,
}

impl LocalShellRunner {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            shell: "sh".to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for LocalShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT_SECS)
    }
}

#[async_trait]
impl CommandRunner for LocalShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        let mut shell = Command::new(&self.shell);
        shell
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, shell.output()).await {
            Ok(result) => result.map_err(|e| {
                anyhow::anyhow!("Failed to spawn '{} -c {}': {}", self.shell, command, e)
            })?,
            Err(_) => {
                return Err(FactsError::CommandTimedOut {
                    command: command.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                }
                .into())
            }
        };

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
