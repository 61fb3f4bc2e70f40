//! Batch ingestion: drive every query of a profile through
//! source → normalize → store and aggregate the outcome.
//!
//! ```text
//! run_ingestion(profile)
//!     │
//!     └─► for each QuerySpec (in order)
//!             ├─► source.fetch_jobs()      FETCHED | FETCH_FAILED (logged, skipped)
//!             └─► for each raw result
//!                     ├─► normalize_job()
//!                     └─► store.insert()   INSERTED | DUPLICATE_SKIPPED | STORE_FAILED
//! ```
//!
//! Nothing below the run level propagates: a failed query or record is
//! logged and counted, and the loop moves on.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::errors::{IngestError, StoreError};
use super::models::{QueryProfile, QuerySpec};
use super::normalize::normalize_job;
use crate::kernel::{BaseJobSource, BasePostingStore};

/// How a run with failed queries is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPolicy {
    /// Always report success; failures are visible only in the counters
    BestEffort,
    /// Report failure when queries were attempted and none succeeded
    #[default]
    FailWhenAllQueriesFail,
}

impl fmt::Display for RunPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPolicy::BestEffort => write!(f, "best_effort"),
            RunPolicy::FailWhenAllQueriesFail => write!(f, "fail_when_all_queries_fail"),
        }
    }
}

impl FromStr for RunPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "best_effort" => Ok(RunPolicy::BestEffort),
            "fail_when_all_queries_fail" => Ok(RunPolicy::FailWhenAllQueriesFail),
            _ => Err(anyhow::anyhow!("Invalid run policy: {}", s)),
        }
    }
}

/// Outcome counters for one run. Ephemeral; logged, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub profile: String,
    pub queries_attempted: usize,
    pub queries_failed: usize,
    pub records_fetched: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub store_failures: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    fn start(profile: &str) -> Self {
        let now = Utc::now();
        Self {
            profile: profile.to_string(),
            queries_attempted: 0,
            queries_failed: 0,
            records_fetched: 0,
            inserted: 0,
            duplicates: 0,
            store_failures: 0,
            started_at: now,
            finished_at: now,
        }
    }

    pub fn all_queries_failed(&self) -> bool {
        self.queries_attempted > 0 && self.queries_failed == self.queries_attempted
    }
}

/// Run every query of `profile` once.
pub async fn run_ingestion(
    profile: &QueryProfile,
    source: &dyn BaseJobSource,
    store: &dyn BasePostingStore,
    policy: RunPolicy,
) -> Result<RunSummary, IngestError> {
    let queries = profile.queries();
    info!(
        profile = %profile.name,
        queries = queries.len(),
        "Starting job fetch and store process"
    );

    let mut summary = RunSummary::start(&profile.name);

    for query in &queries {
        summary.queries_attempted += 1;
        ingest_query(query, source, store, &mut summary).await;
    }

    summary.finished_at = Utc::now();

    info!(
        profile = %summary.profile,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        store_failures = summary.store_failures,
        queries_failed = summary.queries_failed,
        queries_attempted = summary.queries_attempted,
        records_fetched = summary.records_fetched,
        "{} new jobs stored",
        summary.inserted
    );

    if policy == RunPolicy::FailWhenAllQueriesFail && summary.all_queries_failed() {
        error!(profile = %summary.profile, "Every query in the run failed");
        return Err(IngestError::AllQueriesFailed {
            profile: summary.profile.clone(),
            queries: summary.queries_attempted,
            summary,
        });
    }

    Ok(summary)
}

async fn ingest_query(
    query: &QuerySpec,
    source: &dyn BaseJobSource,
    store: &dyn BasePostingStore,
    summary: &mut RunSummary,
) {
    info!(query = %query.term, "Fetching jobs");

    let results = match source.fetch_jobs(query).await {
        Ok(results) => results,
        Err(e) => {
            error!(query = %query.term, kind = e.kind(), error = %e, "Query failed, skipping");
            summary.queries_failed += 1;
            return;
        }
    };

    debug!(query = %query.term, count = results.len(), "Fetched jobs");
    summary.records_fetched += results.len();

    for raw in &results {
        let posting = normalize_job(raw);

        match store.insert(&posting).await {
            Ok(stored) => {
                debug!(job_id = %stored.job_id, "Stored job");
                summary.inserted += 1;
            }
            Err(StoreError::Duplicate { job_id }) => {
                debug!(job_id = %job_id, "Duplicate job_id skipped");
                summary.duplicates += 1;
            }
            Err(e) => {
                error!(
                    query = %query.term,
                    job_id = %posting.display_id(),
                    error = %e,
                    "Error inserting job"
                );
                summary.store_failures += 1;
            }
        }
    }
}
