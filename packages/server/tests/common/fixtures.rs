//! Test fixtures for query profiles and postings.

use server_core::domains::postings::{NewJobPosting, QueryProfile};
use uuid::Uuid;

/// Profile with the given terms and the default search context
pub fn test_profile(name: &str, terms: &[&str]) -> QueryProfile {
    QueryProfile {
        name: name.to_string(),
        schedule: "0 0 0 * * Sun".to_string(),
        location: "India".to_string(),
        google_domain: "google.co.in".to_string(),
        no_cache: false,
        terms: terms.iter().map(|t| t.to_string()).collect(),
    }
}

/// Job id that no other test uses (the test database is shared)
pub fn unique_job_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Posting with every required field present
pub fn complete_posting(job_id: &str, title: &str) -> NewJobPosting {
    NewJobPosting {
        job_id: Some(job_id.to_string()),
        job_title: Some(title.to_string()),
        company_name: Some("Adobe".to_string()),
        job_location: Some("Noida, Uttar Pradesh, India".to_string()),
        company_logo: None,
        posting_date: Some("3 days ago".to_string()),
        employment_type: Some("Full-time".to_string()),
        job_url: Some(format!("https://jobs.example.com/{}", job_id)),
    }
}
