use thiserror::Error;

use super::ingest::RunSummary;

/// Query-level failure from the job source; the query is skipped for the run
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source answered but flagged an application-level error
    #[error("Error in fetching jobs for: {query}, Error: {message}")]
    ApiReported { query: String, message: String },

    /// The request itself failed (network, auth, timeout, bad status)
    #[error("Request failed for: {query}, Error: {message}")]
    Transport { query: String, message: String },

    /// The request succeeded but the expected results were absent
    #[error("Invalid API response for: {query}, Error: {message}")]
    MalformedResponse { query: String, message: String },
}

impl SourceError {
    pub fn query(&self) -> &str {
        match self {
            SourceError::ApiReported { query, .. }
            | SourceError::Transport { query, .. }
            | SourceError::MalformedResponse { query, .. } => query,
        }
    }

    /// Short tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::ApiReported { .. } => "api_reported",
            SourceError::Transport { .. } => "transport",
            SourceError::MalformedResponse { .. } => "malformed_response",
        }
    }
}

/// Record-level persistence outcome other than success
#[derive(Error, Debug)]
pub enum StoreError {
    /// A posting with this job_id already exists. Expected and benign.
    #[error("Duplicate job_id skipped: {job_id}")]
    Duplicate { job_id: String },

    /// The payload violates a required-field constraint
    #[error("Rejected job {job_id}: {reason}")]
    Invalid { job_id: String, reason: String },

    /// Any other persistence failure
    #[error("Error inserting job: {job_id}: {source}")]
    Backend {
        job_id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }
}

/// Run-level failure under [`super::RunPolicy::FailWhenAllQueriesFail`]
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("All {queries} queries failed for profile {profile}")]
    AllQueriesFailed {
        profile: String,
        queries: usize,
        summary: RunSummary,
    },
}

impl IngestError {
    pub fn summary(&self) -> &RunSummary {
        match self {
            IngestError::AllQueriesFailed { summary, .. } => summary,
        }
    }
}
