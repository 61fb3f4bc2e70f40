//! Pure SerpApi REST client.
//!
//! A minimal client for the SerpApi `google_jobs` engine. One call performs
//! one search request and returns the raw `jobs_results` entries, or a
//! classified [`SerpApiError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::{GoogleJobsParams, SerpApiClient};
//!
//! let client = SerpApiClient::new("your-api-key".into())?;
//!
//! let mut params = GoogleJobsParams::new("Software Engineer Google");
//! params.location = Some("India".into());
//! let jobs = client.search_jobs(&params).await?;
//! for job in &jobs {
//!     println!("{}", job.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

use std::time::Duration;

pub use error::{ErrorKind, Result, SerpApiError};
pub use types::{ApplyOption, DetectedExtensions, GoogleJobsParams, JobResult};

use reqwest::StatusCode;

const BASE_URL: &str = "https://serpapi.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a client whose every request is bounded by `timeout`.
    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at another host (used for local testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Run one `google_jobs` search and return the raw job entries.
    pub async fn search_jobs(&self, params: &GoogleJobsParams) -> Result<Vec<JobResult>> {
        let url = format!("{}/search.json", self.base_url);
        let mut query = params.query_pairs();
        query.push(("api_key", self.api_key.clone()));

        tracing::debug!(q = %params.q, no_cache = params.no_cache, "Sending SerpApi search");

        let resp = self.client.get(&url).query(&query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let jobs = parse_jobs_response(status, &body)?;
        tracing::debug!(q = %params.q, count = jobs.len(), "SerpApi search returned");
        Ok(jobs)
    }
}

/// Classify a SerpApi response body.
///
/// An `error` field wins over the HTTP status, since SerpApi reports invalid
/// keys and empty searches that way.
pub fn parse_jobs_response(status: StatusCode, body: &str) -> Result<Vec<JobResult>> {
    let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(body);

    if let Ok(value) = &parsed {
        if let Some(error) = value.get("error") {
            let message = match error.as_str() {
                Some(s) => s.to_string(),
                None => error.to_string(),
            };
            return Err(SerpApiError::Api(message));
        }
    }

    if !status.is_success() {
        return Err(SerpApiError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let value = parsed.map_err(|e| {
        SerpApiError::MalformedResponse(format!("body is not valid JSON: {}", e))
    })?;

    match value.get("jobs_results") {
        Some(serde_json::Value::Array(entries)) => Ok(decode_entries(entries)),
        Some(_) => Err(SerpApiError::MalformedResponse(
            "jobs_results is not an array".to_string(),
        )),
        None => Err(SerpApiError::MalformedResponse(
            "jobs_results missing".to_string(),
        )),
    }
}

/// Decode each entry on its own so one bad entry only drops itself.
fn decode_entries(entries: &[serde_json::Value]) -> Vec<JobResult> {
    let mut jobs = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<JobResult>(entry.clone()) {
            Ok(job) => jobs.push(job),
            Err(e) => {
                let job_id = entry
                    .get("job_id")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "<missing>".to_string());
                tracing::warn!(
                    index,
                    job_id = %job_id,
                    error = %e,
                    "Skipping undecodable jobs_results entry"
                );
            }
        }
    }

    jobs
}
