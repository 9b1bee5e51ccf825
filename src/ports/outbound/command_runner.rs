use crate::shared::Result;
use async_trait::async_trait;

/// Captured result of running a list command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// CommandRunner port for executing list commands
///
/// The application core only builds command strings; how and where they
/// run (local shell, remote transport) is decided by the implementation.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs a shell command and captures its output
    ///
    /// # Errors
    /// Returns an error if the command cannot be spawned or exceeds the
    /// runner's timeout. A non-zero exit status is not an error here; it is
    /// reported through `CommandOutput::exit_code`.
    async fn run(&self, command: &str) -> Result<CommandOutput>;
}
