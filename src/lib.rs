//! pkgfacts - installed-package facts from package manager list output
//!
//! This library turns the text printed by package manager list commands
//! (`npm list -g`, `pip freeze`, `dpkg -l`, ...) into name → version maps,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`package_listing`): dialects, package sets and the line parser
//! - **Application Layer** (`application`): use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): optional `pkgfacts.config.yml` support
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use pkgfacts::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let registry = DialectRegistry::builtin();
//! let npm = registry.get("npm")?;
//!
//! assert_eq!(
//!     npm.list_command(Some("/srv/app")),
//!     "cd /srv/app && npm list -g --depth=0"
//! );
//!
//! let output = "/usr/local\n└── eslint@7.32.0\n└── typescript@4.4.3\n";
//! let packages = PackageListParser::parse(npm.pattern(), output)?;
//! assert_eq!(packages.get("eslint"), Some("7.32.0"));
//! assert_eq!(packages.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod package_listing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::LocalShellRunner;
    pub use crate::application::dto::{
        CollectRequest, DialectDiff, DiffRequest, DiffResponse, FactsResponse, OutputFormat,
        ParseRequest,
    };
    pub use crate::application::use_cases::{
        CollectFactsUseCase, DiffSnapshotsUseCase, ParseOutputUseCase,
    };
    pub use crate::package_listing::dialects::DialectRegistry;
    pub use crate::package_listing::domain::{
        CompiledPattern, DialectPattern, FactsDocument, ListingDialect, PackageName,
        PackageRecord, PackageSet, PackageSnapshot, Version,
    };
    pub use crate::package_listing::services::{
        ListCommandBuilder, PackageListParser, PackageSetDiff, ParseReport, VersionChange,
    };
    pub use crate::ports::outbound::{
        CapturedOutputReader, CommandOutput, CommandRunner, OutputPresenter, OutputSource,
        ProgressReporter, SnapshotFormatter, SnapshotReader,
    };
    pub use crate::shared::error::{ExitCode, FactsError};
    pub use crate::shared::Result;
}
