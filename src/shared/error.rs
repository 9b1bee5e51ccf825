use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow automation to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - facts collected, or snapshots are identical
    Success = 0,
    /// `diff` found added, removed, or changed packages
    ChangesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid pattern, command failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ChangesDetected => write!(f, "Changes Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for package fact collection.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Messages name the dialect or path involved so operators can tell
/// which package-manager integration is broken.
#[derive(Debug, Error)]
pub enum FactsError {
    #[error("Invalid package list pattern for dialect '{dialect}'\nDetails: {details}\n\n💡 Hint: Check the 'pattern' of this dialect; it must be a valid regular expression capturing a package name and a version")]
    InvalidPattern { dialect: String, details: String },

    #[error("Unknown dialect: '{dialect}'\n\n💡 Hint: Available dialects are: {available}")]
    UnknownDialect { dialect: String, available: String },

    #[error("List command failed: {command}\nExit code: {exit_code}\nDetails: {details}\n\n💡 Hint: Verify that the package manager is installed and the directory exists")]
    CommandFailed {
        command: String,
        exit_code: i32,
        details: String,
    },

    #[error("List command timed out after {timeout_secs}s: {command}\n\n💡 Hint: Raise 'command_timeout_secs' in the config file")]
    CommandTimedOut { command: String, timeout_secs: u64 },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to parse snapshot file: {path}\nDetails: {details}\n\n💡 Hint: Snapshot files must be JSON documents produced by `pkgfacts --format json`")]
    SnapshotParseError { path: PathBuf, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
