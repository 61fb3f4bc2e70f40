use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Placeholder used in logs and errors when a payload carries no job_id.
pub const MISSING_JOB_ID: &str = "<missing>";

/// Job posting - one canonical, deduplicated listing from the job source
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    /// External identifier from the source; unique across the table
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub job_location: String,
    pub company_logo: Option<String>,
    /// Free-form source text such as "3 days ago"
    pub posting_date: Option<String>,
    pub employment_type: Option<String>,
    pub job_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload produced by normalization.
///
/// Required fields stay optional here; the store rejects a payload that
/// lacks any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobPosting {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub job_location: Option<String>,
    pub company_logo: Option<String>,
    pub posting_date: Option<String>,
    pub employment_type: Option<String>,
    pub job_url: Option<String>,
}

impl NewJobPosting {
    /// The job_id for logging, or a placeholder when absent
    pub fn display_id(&self) -> &str {
        self.job_id.as_deref().unwrap_or(MISSING_JOB_ID)
    }

    /// First required field that is absent (or an empty job_id)
    pub fn missing_required_field(&self) -> Option<&'static str> {
        match self.job_id.as_deref() {
            None | Some("") => return Some("job_id"),
            Some(_) => {}
        }
        if self.job_title.is_none() {
            return Some("job_title");
        }
        if self.company_name.is_none() {
            return Some("company_name");
        }
        if self.job_location.is_none() {
            return Some("job_location");
        }
        None
    }
}

// =============================================================================
// SQL Queries
// =============================================================================

impl JobPosting {
    /// Insert a new posting.
    ///
    /// Plain INSERT with no ON CONFLICT clause: an existing job_id surfaces as
    /// a unique violation so callers can tell duplicates apart from writes.
    pub async fn create(new: &NewJobPosting, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, JobPosting>(
            r#"
            INSERT INTO job_postings (
                job_id,
                job_title,
                company_name,
                job_location,
                company_logo,
                posting_date,
                employment_type,
                job_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.job_id)
        .bind(&new.job_title)
        .bind(&new.company_name)
        .bind(&new.job_location)
        .bind(&new.company_logo)
        .bind(&new.posting_date)
        .bind(&new.employment_type)
        .bind(&new.job_url)
        .fetch_one(pool)
        .await
    }

    /// Find posting by external job_id
    pub async fn find_by_job_id(job_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        let posting =
            sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings WHERE job_id = $1")
                .bind(job_id)
                .fetch_optional(pool)
                .await?;
        Ok(posting)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
