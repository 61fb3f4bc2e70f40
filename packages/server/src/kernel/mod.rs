//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod posting_store;
pub mod run_guard;
pub mod scheduled_tasks;
pub mod serp_source;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use posting_store::PostgresPostingStore;
pub use run_guard::{RunGuard, RunPermit};
pub use scheduled_tasks::{IngestionScheduler, TriggerOutcome};
pub use serp_source::SerpApiSource;
pub use test_dependencies::{sample_job, InMemoryPostingStore, MockJobSource, TestDependencies};
pub use traits::*;
