//! Server dependencies for the ingestion pipeline (using traits for testability)
//!
//! The job source and the posting store are injected as trait objects so the
//! scheduler, CLI and tests all drive the same pipeline.

use std::sync::Arc;

use crate::kernel::{BaseJobSource, BasePostingStore};

/// Server dependencies accessible to ingestion runs
#[derive(Clone)]
pub struct ServerDeps {
    pub job_source: Arc<dyn BaseJobSource>,
    pub posting_store: Arc<dyn BasePostingStore>,
}

impl ServerDeps {
    pub fn new(
        job_source: Arc<dyn BaseJobSource>,
        posting_store: Arc<dyn BasePostingStore>,
    ) -> Self {
        Self {
            job_source,
            posting_store,
        }
    }
}
