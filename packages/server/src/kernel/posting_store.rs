//! PostgreSQL-backed posting store.
//!
//! Deduplication is enforced by the UNIQUE constraint on `job_postings.job_id`,
//! so concurrent writers can never produce two rows for one identifier.

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use super::BasePostingStore;
use crate::domains::postings::{JobPosting, NewJobPosting, StoreError};

pub struct PostgresPostingStore {
    pool: PgPool,
}

impl PostgresPostingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasePostingStore for PostgresPostingStore {
    async fn insert(&self, posting: &NewJobPosting) -> Result<JobPosting, StoreError> {
        JobPosting::create(posting, &self.pool)
            .await
            .map_err(|e| classify_insert_error(posting, e))
    }

    async fn find_by_job_id(&self, job_id: &str) -> anyhow::Result<Option<JobPosting>> {
        JobPosting::find_by_job_id(job_id, &self.pool).await
    }

    async fn count(&self) -> anyhow::Result<i64> {
        JobPosting::count(&self.pool).await
    }
}

/// Map a failed INSERT onto the store error taxonomy.
fn classify_insert_error(posting: &NewJobPosting, error: sqlx::Error) -> StoreError {
    let job_id = posting.display_id().to_string();

    let kind = error.as_database_error().map(|db| db.kind());
    match kind {
        Some(ErrorKind::UniqueViolation) => StoreError::Duplicate { job_id },
        Some(ErrorKind::NotNullViolation) | Some(ErrorKind::CheckViolation) => {
            let reason = match posting.missing_required_field() {
                Some(field) => format!("missing required field `{}`", field),
                None => error.to_string(),
            };
            StoreError::Invalid { job_id, reason }
        }
        _ => StoreError::Backend {
            job_id,
            source: error.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_backend_failures() {
        let posting = NewJobPosting {
            job_id: Some("job-1".to_string()),
            ..Default::default()
        };

        let err = classify_insert_error(&posting, sqlx::Error::PoolTimedOut);

        match err {
            StoreError::Backend { job_id, .. } => assert_eq!(job_id, "job-1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
