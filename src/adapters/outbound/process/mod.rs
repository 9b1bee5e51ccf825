/// Process adapters for running list commands on the local machine
mod local_shell_runner;

pub use local_shell_runner::{LocalShellRunner, DEFAULT_COMMAND_TIMEOUT_SECS};
