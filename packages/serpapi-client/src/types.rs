use serde::{Deserialize, Serialize};

/// Parameters for a `google_jobs` search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleJobsParams {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_domain: Option<String>,
    /// Force SerpApi to bypass its result cache.
    #[serde(default)]
    pub no_cache: bool,
}

impl GoogleJobsParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Query string pairs, excluding the API key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("engine", "google_jobs".to_string()), ("q", self.q.clone())];
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(domain) = &self.google_domain {
            pairs.push(("google_domain", domain.clone()));
        }
        if self.no_cache {
            pairs.push(("no_cache", "true".to_string()));
        }
        pairs
    }
}

/// A single entry of `jobs_results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub via: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub detected_extensions: Option<DetectedExtensions>,
    #[serde(default)]
    pub apply_options: Option<Vec<ApplyOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedExtensions {
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub schedule_type: Option<String>,
    /// Misspelled key some responses use instead of `schedule_type`
    #[serde(default)]
    pub scheduled_type: Option<String>,
}

impl DetectedExtensions {
    /// `schedule_type`, falling back to `scheduled_type`
    pub fn employment_type(&self) -> Option<&str> {
        self.schedule_type
            .as_deref()
            .or(self.scheduled_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOption {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
