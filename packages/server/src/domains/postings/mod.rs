//! Job postings domain: the canonical record, query profiles, normalization
//! of source results and the batch ingestion run.

pub mod errors;
pub mod ingest;
pub mod models;
pub mod normalize;

pub use errors::{IngestError, SourceError, StoreError};
pub use ingest::{run_ingestion, RunPolicy, RunSummary};
pub use models::{JobPosting, NewJobPosting, QueryProfile, QuerySpec};
pub use normalize::normalize_job;
