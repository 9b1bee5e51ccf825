/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the use cases in `application`
/// are called directly by the CLI.
pub mod outbound;
