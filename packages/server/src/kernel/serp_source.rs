// SerpApiClient adapter (implements BaseJobSource trait)

use std::sync::Arc;

use async_trait::async_trait;
use serpapi_client::{ErrorKind, GoogleJobsParams, JobResult, SerpApiClient, SerpApiError};

use super::BaseJobSource;
use crate::domains::postings::{QuerySpec, SourceError};

/// Wrapper around SerpApiClient that implements BaseJobSource trait
pub struct SerpApiSource(pub Arc<SerpApiClient>);

impl SerpApiSource {
    pub fn new(client: Arc<SerpApiClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseJobSource for SerpApiSource {
    async fn fetch_jobs(&self, query: &QuerySpec) -> Result<Vec<JobResult>, SourceError> {
        self.0
            .search_jobs(&to_params(query))
            .await
            .map_err(|e| to_source_error(&query.term, e))
    }
}

fn to_params(query: &QuerySpec) -> GoogleJobsParams {
    GoogleJobsParams {
        q: query.term.clone(),
        location: Some(query.location.clone()),
        google_domain: Some(query.google_domain.clone()),
        no_cache: query.no_cache,
    }
}

fn to_source_error(term: &str, error: SerpApiError) -> SourceError {
    let query = term.to_string();
    let message = match &error {
        SerpApiError::Api(message) => message.clone(),
        other => other.to_string(),
    };

    match error.kind() {
        ErrorKind::Api => SourceError::ApiReported { query, message },
        ErrorKind::Transport => SourceError::Transport { query, message },
        ErrorKind::Malformed => SourceError::MalformedResponse { query, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adobe_query() -> QuerySpec {
        QuerySpec {
            term: "Software Engineer Adobe".to_string(),
            location: "India".to_string(),
            google_domain: "google.co.in".to_string(),
            no_cache: true,
        }
    }

    #[test]
    fn params_carry_full_query_context() {
        let params = to_params(&adobe_query());

        assert_eq!(params.q, "Software Engineer Adobe");
        assert_eq!(params.location.as_deref(), Some("India"));
        assert_eq!(params.google_domain.as_deref(), Some("google.co.in"));
        assert!(params.no_cache);
    }

    #[test]
    fn api_errors_become_api_reported() {
        let err = to_source_error("q", SerpApiError::Api("Invalid API key.".to_string()));

        match err {
            SourceError::ApiReported { query, message } => {
                assert_eq!(query, "q");
                assert_eq!(message, "Invalid API key.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_errors_become_transport() {
        let err = to_source_error(
            "q",
            SerpApiError::Status {
                status: 503,
                body: "unavailable".to_string(),
            },
        );

        assert_eq!(err.kind(), "transport");
        assert_eq!(err.query(), "q");
    }

    #[test]
    fn malformed_errors_stay_malformed() {
        let err = to_source_error(
            "q",
            SerpApiError::MalformedResponse("jobs_results missing".to_string()),
        );

        assert!(matches!(err, SourceError::MalformedResponse { .. }));
        assert!(err.to_string().contains("jobs_results missing"));
    }
}
