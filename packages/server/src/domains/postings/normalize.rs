//! Mapping from raw source results to the canonical posting shape.

use serpapi_client::JobResult;

use super::models::NewJobPosting;

/// Map one raw job result to an insert payload.
///
/// Total: absent nested structures become absent fields. Required fields are
/// passed through as-is and checked by the store.
pub fn normalize_job(job: &JobResult) -> NewJobPosting {
    let extensions = job.detected_extensions.as_ref();

    NewJobPosting {
        job_id: job.job_id.clone(),
        job_title: job.title.clone(),
        company_name: job.company_name.clone(),
        job_location: job.location.clone(),
        company_logo: non_empty(job.thumbnail.as_deref()),
        posting_date: non_empty(extensions.and_then(|e| e.posted_at.as_deref())),
        employment_type: non_empty(extensions.and_then(|e| e.employment_type())),
        job_url: first_apply_link(job),
    }
}

/// Link of the first apply option, if there is one
fn first_apply_link(job: &JobResult) -> Option<String> {
    job.apply_options
        .as_ref()
        .and_then(|options| options.first())
        .and_then(|option| non_empty(option.link.as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
