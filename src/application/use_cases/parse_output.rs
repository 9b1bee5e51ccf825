use crate::application::dto::{FactsResponse, ParseRequest};
use crate::package_listing::dialects::DialectRegistry;
use crate::package_listing::domain::PackageSnapshot;
use crate::package_listing::services::PackageListParser;
use crate::ports::outbound::{CapturedOutputReader, ProgressReporter};
use crate::shared::Result;

/// ParseOutputUseCase - parses list output captured by another tool
///
/// # Type Parameters
/// * `OR` - CapturedOutputReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ParseOutputUseCase<OR, PR> {
    registry: DialectRegistry,
    output_reader: OR,
    progress_reporter: PR,
}

impl<OR, PR> ParseOutputUseCase<OR, PR>
where
    OR: CapturedOutputReader,
    PR: ProgressReporter,
{
    pub fn new(registry: DialectRegistry, output_reader: OR, progress_reporter: PR) -> Self {
        Self {
            registry,
            output_reader,
            progress_reporter,
        }
    }

    /// Parses the captured output into a single snapshot
    ///
    /// The dialect pattern is compiled before the output is read.
    pub fn execute(&self, request: ParseRequest) -> Result<FactsResponse> {
        let dialect = self.registry.get(&request.dialect)?;
        let pattern = dialect.pattern().compile()?;

        self.progress_reporter.report(&format!(
            "📖 Reading {} list output from: {}",
            dialect.id(),
            request.source
        ));
        let output = self.output_reader.read_output(&request.source)?;

        let report = PackageListParser::parse_with_report(&pattern, &output);
        self.progress_reporter.report_detail(&format!(
            "   {} line(s) matched, {} skipped",
            report.matched_lines, report.skipped_lines
        ));
        if !report.overridden.is_empty() {
            self.progress_reporter.report_detail(&format!(
                "   later lines overrode versions of {}",
                report.overridden.join(", ")
            ));
        }
        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s)",
            report.packages.len()
        ));

        Ok(FactsResponse::new(vec![PackageSnapshot::new(
            dialect.id().to_string(),
            request.directory,
            report.packages,
            report.skipped_lines,
        )]))
    }
}
