use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use dotenvy::dotenv;

use crate::domains::postings::{QueryProfile, RunPolicy};

/// Application configuration loaded from environment variables.
///
/// Read once at startup; never reloaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub serpapi_key: String,
    pub port: u16,
    pub schedule_timezone: Tz,
    pub profiles: Vec<QueryProfile>,
    pub fetch_timeout: Duration,
    pub run_policy: RunPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let profiles = match var("QUERY_PROFILES_PATH") {
            Some(path) => QueryProfile::load_from_file(Path::new(&path))?,
            None => QueryProfile::builtins_from_list(
                &var("ENABLED_PROFILES").unwrap_or_else(|| "company_sweep".to_string()),
            )
            .context("ENABLED_PROFILES is invalid")?,
        };

        let timezone = var("SCHEDULE_TIMEZONE").unwrap_or_else(|| "Asia/Kolkata".to_string());

        Ok(Self {
            database_url: var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            serpapi_key: var("SERPAPI_KEY").context("SERPAPI_KEY must be set")?,
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            schedule_timezone: timezone
                .parse()
                .map_err(|e| anyhow!("SCHEDULE_TIMEZONE {} is invalid: {}", timezone, e))?,
            profiles,
            fetch_timeout: Duration::from_secs(
                var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a valid number")?,
            ),
            run_policy: match var("RUN_POLICY") {
                Some(policy) => policy.parse().context("RUN_POLICY is invalid")?,
                None => RunPolicy::default(),
            },
        })
    }
}
