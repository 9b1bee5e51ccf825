/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (shell, file system, console, etc.).
pub mod captured_output_reader;
pub mod command_runner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_formatter;
pub mod snapshot_reader;

pub use captured_output_reader::{CapturedOutputReader, OutputSource};
pub use command_runner::{CommandOutput, CommandRunner};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_formatter::SnapshotFormatter;
pub use snapshot_reader::SnapshotReader;
