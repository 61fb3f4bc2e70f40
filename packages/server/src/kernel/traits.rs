// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The ingestion run is a domain function that takes these traits.
//
// Naming convention: Base* for trait names (e.g., BaseJobSource)

use async_trait::async_trait;
use serpapi_client::JobResult;

use crate::domains::postings::{JobPosting, NewJobPosting, QuerySpec, SourceError, StoreError};

// =============================================================================
// Job Source Trait (Infrastructure - external search API)
// =============================================================================

#[async_trait]
pub trait BaseJobSource: Send + Sync {
    /// Perform exactly one request for `query`. No retries.
    async fn fetch_jobs(&self, query: &QuerySpec) -> Result<Vec<JobResult>, SourceError>;
}

// =============================================================================
// Posting Store Trait (Infrastructure - deduplicating persistence)
// =============================================================================

#[async_trait]
pub trait BasePostingStore: Send + Sync {
    /// Insert-or-fail. An existing job_id yields `StoreError::Duplicate`;
    /// it is never merged or overwritten.
    async fn insert(&self, posting: &NewJobPosting) -> Result<JobPosting, StoreError>;

    async fn find_by_job_id(&self, job_id: &str) -> anyhow::Result<Option<JobPosting>>;

    async fn count(&self) -> anyhow::Result<i64>;
}
