mod list_command_builder;
mod package_list_parser;
mod package_set_diff;

pub use list_command_builder::ListCommandBuilder;
pub use package_list_parser::{PackageListParser, ParseReport};
pub use package_set_diff::{PackageSetDiff, VersionChange};
