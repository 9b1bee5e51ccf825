use crate::application::dto::{CollectRequest, FactsResponse};
use crate::package_listing::dialects::DialectRegistry;
use crate::package_listing::domain::{CompiledPattern, ListingDialect, PackageSnapshot};
use crate::package_listing::services::PackageListParser;
use crate::ports::outbound::{CommandRunner, ProgressReporter};
use crate::shared::error::FactsError;
use crate::shared::Result;
use futures::future::try_join_all;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A dialect ready to run: pattern compiled, command built
struct CollectionPlan<'a> {
    dialect: &'a ListingDialect,
    pattern: CompiledPattern,
    command: String,
}

/// CollectFactsUseCase - runs list commands and parses their output
///
/// # Type Parameters
/// * `CR` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectFactsUseCase<CR, PR> {
    registry: DialectRegistry,
    command_runner: CR,
    progress_reporter: PR,
}

impl<CR, PR> CollectFactsUseCase<CR, PR>
where
    CR: CommandRunner,
    PR: ProgressReporter,
{
    pub fn new(registry: DialectRegistry, command_runner: CR, progress_reporter: PR) -> Self {
        Self {
            registry,
            command_runner,
            progress_reporter,
        }
    }

    /// Collects one snapshot per requested dialect
    ///
    /// Every pattern is compiled before any command runs, so a broken
    /// dialect never leaves a half-finished collection behind. Dialects
    /// are collected concurrently; snapshots keep the request order.
    pub async fn execute(&self, request: CollectRequest) -> Result<FactsResponse> {
        let plans = self.plan(&request)?;

        self.progress_reporter.report(&format!(
            "🔍 Collecting package facts for {} dialect(s)...",
            plans.len()
        ));

        let completed = AtomicUsize::new(0);
        let total = plans.len();
        let collections = plans
            .iter()
            .map(|plan| self.collect_one(plan, request.directory.as_deref(), &completed, total));
        let snapshots = try_join_all(collections).await?;

        let response = FactsResponse::new(snapshots);
        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} package(s) across {} dialect(s)",
            response.package_count(),
            response.snapshots.len()
        ));

        Ok(response)
    }

    fn plan<'a>(&'a self, request: &CollectRequest) -> Result<Vec<CollectionPlan<'a>>> {
        let ids = request.unique_dialects();
        if ids.is_empty() {
            return Err(FactsError::Validation {
                message: "At least one dialect must be requested".to_string(),
            }
            .into());
        }

        ids.into_iter()
            .map(|id| -> Result<CollectionPlan<'a>> {
                let dialect = self.registry.get(id)?;
                Ok(CollectionPlan {
                    dialect,
                    pattern: dialect.pattern().compile()?,
                    command: dialect.list_command(request.directory.as_deref()),
                })
            })
            .collect()
    }

    async fn collect_one(
        &self,
        plan: &CollectionPlan<'_>,
        directory: Option<&str>,
        completed: &AtomicUsize,
        total: usize,
    ) -> Result<PackageSnapshot> {
        self.progress_reporter
            .report_detail(&format!("   $ {}", plan.command));

        let output = self.command_runner.run(&plan.command).await?;

        if !output.success() {
            let exit_code = output.exit_code.unwrap_or(-1);
            if output.stdout.trim().is_empty() {
                return Err(FactsError::CommandFailed {
                    command: plan.command.clone(),
                    exit_code,
                    details: output.stderr.trim().to_string(),
                }
                .into());
            }
            self.progress_reporter.report_warning(&format!(
                "⚠️  '{}' exited with code {}; parsing its output anyway",
                plan.command, exit_code
            ));
        }

        let report = PackageListParser::parse_with_report(&plan.pattern, &output.stdout);

        if report.skipped_lines > 0 {
            self.progress_reporter.report_detail(&format!(
                "   {}: skipped {} unrecognized line(s)",
                plan.dialect.id(),
                report.skipped_lines
            ));
        }
        if !report.overridden.is_empty() {
            self.progress_reporter.report_detail(&format!(
                "   {}: later lines overrode versions of {}",
                plan.dialect.id(),
                report.overridden.join(", ")
            ));
        }

        let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
        self.progress_reporter
            .report_progress(done, total, Some(plan.dialect.id()));

        Ok(PackageSnapshot::new(
            plan.dialect.id().to_string(),
            directory
                .filter(|d| !d.trim().is_empty())
                .map(str::to_string),
            report.packages,
            report.skipped_lines,
        ))
    }
}
