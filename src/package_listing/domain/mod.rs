/// Domain model for package list facts
///
/// Value objects only; no I/O happens in this module.
pub mod dialect;
pub mod package;
pub mod package_set;
pub mod snapshot;

pub use dialect::{CompiledPattern, DialectPattern, ListingDialect};
pub use package::{PackageName, PackageRecord, Version};
pub use package_set::PackageSet;
pub use snapshot::{FactsDocument, PackageSnapshot, TOOL_NAME};
