/// Use cases module containing application orchestration
mod collect_facts;
mod diff_snapshots;
mod parse_output;

pub use collect_facts::CollectFactsUseCase;
pub use diff_snapshots::DiffSnapshotsUseCase;
pub use parse_output::ParseOutputUseCase;
