/// Mock implementations for testing
mod mock_command_runner;
mod mock_output_reader;
mod mock_progress_reporter;
mod mock_snapshot_reader;

pub use mock_command_runner::MockCommandRunner;
pub use mock_output_reader::MockOutputReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_snapshot_reader::MockSnapshotReader;
