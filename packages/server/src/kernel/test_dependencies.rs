// Mock implementations of the kernel traits for testing
//
// Provides an in-memory job source and posting store that can be injected
// into ServerDeps for tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serpapi_client::{ApplyOption, DetectedExtensions, JobResult};
use uuid::Uuid;

use super::{BaseJobSource, BasePostingStore, ServerDeps};
use crate::domains::postings::{JobPosting, NewJobPosting, QuerySpec, SourceError, StoreError};

/// Build a complete raw job result for fixtures
pub fn sample_job(job_id: &str, company: &str) -> JobResult {
    JobResult {
        job_id: Some(job_id.to_string()),
        title: Some("Software Engineer".to_string()),
        company_name: Some(company.to_string()),
        location: Some("Bengaluru, Karnataka, India".to_string()),
        via: Some("LinkedIn".to_string()),
        thumbnail: None,
        detected_extensions: Some(DetectedExtensions {
            posted_at: Some("1 day ago".to_string()),
            schedule_type: Some("Full-time".to_string()),
            scheduled_type: None,
        }),
        apply_options: Some(vec![ApplyOption {
            title: Some("Apply".to_string()),
            link: Some(format!("https://jobs.example.com/{}", job_id)),
        }]),
    }
}

// =============================================================================
// Mock Job Source
// =============================================================================

#[derive(Debug, Clone)]
enum MockResponse {
    Jobs(Vec<JobResult>),
    ApiError(String),
    TransportError(String),
    Malformed(String),
}

/// Job source that answers from canned responses keyed by search term.
///
/// Terms without a canned response return an empty result list.
#[derive(Default)]
pub struct MockJobSource {
    responses: Mutex<HashMap<String, MockResponse>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(self, term: &str, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(term.to_string(), response);
        self
    }

    pub fn with_jobs(self, term: &str, jobs: Vec<JobResult>) -> Self {
        self.with(term, MockResponse::Jobs(jobs))
    }

    pub fn with_api_error(self, term: &str, message: &str) -> Self {
        self.with(term, MockResponse::ApiError(message.to_string()))
    }

    pub fn with_transport_error(self, term: &str) -> Self {
        self.with(
            term,
            MockResponse::TransportError("connection reset by peer".to_string()),
        )
    }

    pub fn with_malformed_response(self, term: &str) -> Self {
        self.with(
            term,
            MockResponse::Malformed("jobs_results missing".to_string()),
        )
    }

    /// Search terms fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseJobSource for MockJobSource {
    async fn fetch_jobs(&self, query: &QuerySpec) -> Result<Vec<JobResult>, SourceError> {
        self.calls.lock().unwrap().push(query.term.clone());

        let response = self.responses.lock().unwrap().get(&query.term).cloned();
        let query_term = query.term.clone();
        match response {
            None => Ok(vec![]),
            Some(MockResponse::Jobs(jobs)) => Ok(jobs),
            Some(MockResponse::ApiError(message)) => Err(SourceError::ApiReported {
                query: query_term,
                message,
            }),
            Some(MockResponse::TransportError(message)) => Err(SourceError::Transport {
                query: query_term,
                message,
            }),
            Some(MockResponse::Malformed(message)) => Err(SourceError::MalformedResponse {
                query: query_term,
                message,
            }),
        }
    }
}

// =============================================================================
// In-Memory Posting Store
// =============================================================================

/// Posting store with the same insert-or-fail contract as the Postgres store
#[derive(Default)]
pub struct InMemoryPostingStore {
    postings: Mutex<Vec<JobPosting>>,
    failing_job_ids: Mutex<HashSet<String>>,
}

impl InMemoryPostingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make inserts of `job_id` fail with a backend error
    pub fn failing_on(self, job_id: &str) -> Self {
        self.failing_job_ids
            .lock()
            .unwrap()
            .insert(job_id.to_string());
        self
    }

    /// Snapshot of stored postings in insertion order
    pub fn postings(&self) -> Vec<JobPosting> {
        self.postings.lock().unwrap().clone()
    }
}

#[async_trait]
impl BasePostingStore for InMemoryPostingStore {
    async fn insert(&self, posting: &NewJobPosting) -> Result<JobPosting, StoreError> {
        let job_id = posting.display_id().to_string();

        if let Some(field) = posting.missing_required_field() {
            return Err(StoreError::Invalid {
                job_id,
                reason: format!("missing required field `{}`", field),
            });
        }

        if self.failing_job_ids.lock().unwrap().contains(&job_id) {
            return Err(StoreError::Backend {
                job_id,
                source: anyhow::anyhow!("simulated storage failure"),
            });
        }

        let mut postings = self.postings.lock().unwrap();
        if postings.iter().any(|p| p.job_id == job_id) {
            return Err(StoreError::Duplicate { job_id });
        }

        let now = Utc::now();
        let stored = JobPosting {
            id: Uuid::new_v4(),
            job_id,
            job_title: posting.job_title.clone().unwrap_or_default(),
            company_name: posting.company_name.clone().unwrap_or_default(),
            job_location: posting.job_location.clone().unwrap_or_default(),
            company_logo: posting.company_logo.clone(),
            posting_date: posting.posting_date.clone(),
            employment_type: posting.employment_type.clone(),
            job_url: posting.job_url.clone(),
            created_at: now,
            updated_at: now,
        };
        postings.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_job_id(&self, job_id: &str) -> anyhow::Result<Option<JobPosting>> {
        Ok(self
            .postings
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.job_id == job_id)
            .cloned())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(self.postings.lock().unwrap().len() as i64)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock job source and in-memory store, with handles kept for assertions
pub struct TestDependencies {
    pub job_source: Arc<MockJobSource>,
    pub posting_store: Arc<InMemoryPostingStore>,
}

impl TestDependencies {
    pub fn new(job_source: MockJobSource) -> Self {
        Self {
            job_source: Arc::new(job_source),
            posting_store: Arc::new(InMemoryPostingStore::new()),
        }
    }

    pub fn with_store(mut self, store: InMemoryPostingStore) -> Self {
        self.posting_store = Arc::new(store);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.job_source.clone(), self.posting_store.clone())
    }
}
