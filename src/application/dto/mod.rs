/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod collect_request;
mod diff_request;
mod facts_response;
mod output_format;
mod parse_request;

pub use collect_request::CollectRequest;
pub use diff_request::DiffRequest;
pub use facts_response::{DiffResponse, DialectDiff, FactsResponse};
pub use output_format::OutputFormat;
pub use parse_request::ParseRequest;
