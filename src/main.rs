mod cli;

use cli::{Args, Command};
use pkgfacts::adapters::outbound::console::StderrProgressReporter;
use pkgfacts::adapters::outbound::filesystem::FileSystemReader;
use pkgfacts::adapters::outbound::process::{LocalShellRunner, DEFAULT_COMMAND_TIMEOUT_SECS};
use pkgfacts::application::dto::{
    CollectRequest, DiffRequest, FactsResponse, OutputFormat, ParseRequest,
};
use pkgfacts::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pkgfacts::application::use_cases::{
    CollectFactsUseCase, DiffSnapshotsUseCase, ParseOutputUseCase,
};
use pkgfacts::config::{self, ConfigFile};
use pkgfacts::package_listing::dialects::DialectRegistry;
use pkgfacts::ports::outbound::{OutputPresenter, OutputSource};
use pkgfacts::shared::error::{ExitCode, FactsError};
use pkgfacts::shared::Result;
use std::path::Path;
use std::process;

/// Dialect collected when neither the CLI nor the config names one
const DEFAULT_DIALECT: &str = "npm";

#[tokio::main]
async fn main() {
    match run().await {
        Ok(ExitCode::Success) => {}
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parsing errors exit with code 2 inside clap
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let format = resolve_format(args.format, &config)?;

    let registry = DialectRegistry::builtin().with_custom(config.custom_listing_dialects());
    let progress_reporter = StderrProgressReporter::new(args.verbose);
    let presenter = PresenterFactory::create(PresenterType::from_output_path(args.output));

    match args.command {
        Command::Command { dialect, directory } => {
            let dialect = registry.get(&dialect)?;
            presenter.present(&dialect.list_command(directory.as_deref()))?;
        }
        Command::Parse {
            dialect,
            input,
            directory,
        } => {
            let source = input.map(OutputSource::File).unwrap_or(OutputSource::Stdin);
            let use_case =
                ParseOutputUseCase::new(registry, FileSystemReader::new(), progress_reporter);
            let response = use_case.execute(ParseRequest::new(dialect, source, directory))?;
            present_snapshots(format, &response, presenter.as_ref())?;
        }
        Command::Collect {
            dialects,
            directory,
        } => {
            let dialects = if dialects.is_empty() {
                config
                    .dialects
                    .clone()
                    .unwrap_or_else(|| vec![DEFAULT_DIALECT.to_string()])
            } else {
                dialects
            };
            let runner = LocalShellRunner::new(
                config
                    .command_timeout_secs
                    .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS),
            );

            let use_case = CollectFactsUseCase::new(registry, runner, progress_reporter);
            let response = use_case
                .execute(CollectRequest::new(dialects, directory))
                .await?;
            present_snapshots(format, &response, presenter.as_ref())?;
        }
        Command::Diff { old, new, dialect } => {
            let use_case = DiffSnapshotsUseCase::new(FileSystemReader::new(), progress_reporter);
            let response = use_case.execute(DiffRequest::new(old, new, dialect))?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            let formatted = FormatterFactory::create(format).format_diff(&response.diffs)?;
            presenter.present(&formatted)?;

            if response.has_changes() {
                return Ok(ExitCode::ChangesDetected);
            }
        }
        Command::Dialects => {
            presenter.present(&render_dialects(&registry))?;
        }
    }

    Ok(ExitCode::Success)
}

/// Explicit `--config` must exist; otherwise look in the working directory
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// CLI flag first, then the config file, then JSON
fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(value) => value.parse().map_err(|message: String| {
            FactsError::Validation {
                message: format!("config field 'format': {}", message),
            }
            .into()
        }),
        None => Ok(OutputFormat::default()),
    }
}

fn present_snapshots(
    format: OutputFormat,
    response: &FactsResponse,
    presenter: &dyn OutputPresenter,
) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted = FormatterFactory::create(format).format_snapshots(&response.snapshots)?;
    presenter.present(&formatted)
}

fn render_dialects(registry: &DialectRegistry) -> String {
    let width = registry.ids().iter().map(|id| id.len()).max().unwrap_or(0);
    registry
        .iter()
        .map(|dialect| {
            let line = format!("{:<width$}  {}", dialect.id(), dialect.base_command());
            if dialect.description().is_empty() {
                line
            } else {
                format!("{}\n{:<width$}  {}", line, "", dialect.description())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
