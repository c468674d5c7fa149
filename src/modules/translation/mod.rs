/// Translation manager model
///
/// The data model (sets, nodes, jobs) and the ports to the services that
/// persist them and talk to providers.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::*;
pub use infrastructure::InMemoryProviderRegistry;
