use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SnapshotFormatter;

/// Factory for creating snapshot formatters
///
/// Selects the formatter adapter for an output format so that callers
/// only deal with the `SnapshotFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pkgfacts::application::dto::OutputFormat;
    /// use pkgfacts::application::factories::FormatterFactory;
    /// use pkgfacts::ports::outbound::SnapshotFormatter;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// assert!(formatter.format_snapshots(&[]).is_ok());
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SnapshotFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}
