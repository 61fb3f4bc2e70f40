//! Scheduled ingestion runs using tokio-cron-scheduler.
//!
//! Each configured query profile gets one cron job. Every trigger, scheduled
//! or on-demand, goes through [`IngestionScheduler::trigger`], which holds the
//! process-wide [`RunGuard`] for the whole batch.
//!
//! ```text
//! Scheduler (per-profile cron, fixed timezone)
//!     │
//!     └─► trigger(profile)
//!             ├─► guard busy → Skipped (never queued, never concurrent)
//!             └─► spawn run_ingestion() → Completed | Failed | Aborted
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info, warn};

use super::run_guard::RunGuard;
use super::ServerDeps;
use crate::domains::postings::{run_ingestion, IngestError, QueryProfile, RunPolicy, RunSummary};

/// Result of a single trigger
#[derive(Debug)]
pub enum TriggerOutcome {
    Completed(RunSummary),
    /// The run finished but the run policy classified it as failed
    Failed(IngestError),
    /// The run task panicked; the guard was still released
    Aborted(String),
    /// Another run held the guard
    Skipped,
    UnknownProfile(String),
}

impl TriggerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TriggerOutcome::Completed(_))
    }
}

/// Process-wide ingestion scheduler.
#[derive(Clone)]
pub struct IngestionScheduler {
    deps: Arc<ServerDeps>,
    profiles: Arc<Vec<QueryProfile>>,
    policy: RunPolicy,
    guard: RunGuard,
}

impl IngestionScheduler {
    pub fn new(deps: Arc<ServerDeps>, profiles: Vec<QueryProfile>, policy: RunPolicy) -> Self {
        Self {
            deps,
            profiles: Arc::new(profiles),
            policy,
            guard: RunGuard::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.guard.is_running()
    }

    /// Run `profile_name` now unless another run is in progress.
    pub async fn trigger(&self, profile_name: &str) -> TriggerOutcome {
        let Some(profile) = self.profiles.iter().find(|p| p.name == profile_name).cloned() else {
            warn!(profile = profile_name, "Trigger for unknown query profile ignored");
            return TriggerOutcome::UnknownProfile(profile_name.to_string());
        };

        let Some(permit) = self.guard.try_acquire() else {
            warn!(
                profile = profile_name,
                "Ingestion run already in progress, skipping trigger"
            );
            return TriggerOutcome::Skipped;
        };

        let deps = self.deps.clone();
        let policy = self.policy;
        let handle = tokio::spawn(async move {
            let _permit = permit;
            run_ingestion(
                &profile,
                deps.job_source.as_ref(),
                deps.posting_store.as_ref(),
                policy,
            )
            .await
        });

        match handle.await {
            Ok(Ok(summary)) => TriggerOutcome::Completed(summary),
            Ok(Err(e)) => {
                error!(profile = profile_name, error = %e, "Ingestion run failed");
                TriggerOutcome::Failed(e)
            }
            Err(e) => {
                error!(profile = profile_name, error = %e, "Ingestion run aborted");
                TriggerOutcome::Aborted(e.to_string())
            }
        }
    }

    /// Register one cron job per profile and start the scheduler.
    pub async fn start(&self, timezone: Tz) -> Result<JobScheduler> {
        let scheduler = JobScheduler::new()
            .await
            .context("Failed to create job scheduler")?;

        for profile in self.profiles.iter() {
            let this = self.clone();
            let name = profile.name.clone();
            let job = Job::new_async_tz(profile.schedule.as_str(), timezone, move |_uuid, _lock| {
                let this = this.clone();
                let name = name.clone();
                Box::pin(async move {
                    info!(profile = %name, "Cron job triggered: Fetching jobs...");
                    this.trigger(&name).await;
                })
            })
            .with_context(|| {
                format!(
                    "Invalid schedule '{}' for query profile {}",
                    profile.schedule, profile.name
                )
            })?;

            scheduler.add(job).await?;
            info!(
                profile = %profile.name,
                schedule = %profile.schedule,
                timezone = %timezone,
                queries = profile.terms.len(),
                "Scheduled query profile"
            );
        }

        scheduler.start().await?;

        info!(profiles = self.profiles.len(), "Scheduled tasks started");
        Ok(scheduler)
    }
}
