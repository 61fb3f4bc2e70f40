use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use cron::Schedule;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "India";
pub const DEFAULT_GOOGLE_DOMAIN: &str = "google.co.in";

/// Employers covered by the weekly company sweep.
pub const TOP_EMPLOYERS: [&str; 20] = [
    "Google",
    "Amazon",
    "Microsoft",
    "Apple",
    "Facebook",
    "Intel",
    "IBM",
    "Cisco",
    "Oracle",
    "SAP",
    "Samsung",
    "Sony",
    "Dell",
    "Adobe",
    "HP",
    "NVIDIA",
    "Salesforce",
    "Accenture",
    "Infosys",
    "TCS",
];

/// One parameterized request to the job source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub term: String,
    pub location: String,
    pub google_domain: String,
    pub no_cache: bool,
}

/// A named, scheduled list of search terms sharing the same context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfile {
    pub name: String,
    /// Cron expression with seconds: `sec min hour day-of-month month day-of-week`
    pub schedule: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_google_domain")]
    pub google_domain: String,
    #[serde(default)]
    pub no_cache: bool,
    pub terms: Vec<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_google_domain() -> String {
    DEFAULT_GOOGLE_DOMAIN.to_string()
}

impl QueryProfile {
    /// Weekly sweep of software engineering roles at large employers
    /// (Sundays at midnight), bypassing the source cache.
    pub fn company_sweep() -> Self {
        Self {
            name: "company_sweep".to_string(),
            schedule: "0 0 0 * * Sun".to_string(),
            location: default_location(),
            google_domain: default_google_domain(),
            no_cache: true,
            terms: TOP_EMPLOYERS
                .iter()
                .map(|company| format!("Software Engineer {}", company))
                .collect(),
        }
    }

    /// Generic fresher query, every two days at midnight.
    pub fn fresher_jobs() -> Self {
        Self {
            name: "fresher_jobs".to_string(),
            schedule: "0 0 0 */2 * *".to_string(),
            location: default_location(),
            google_domain: default_google_domain(),
            no_cache: false,
            terms: vec!["Software Engineer Freshers in the last week".to_string()],
        }
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "company_sweep" => Some(Self::company_sweep()),
            "fresher_jobs" => Some(Self::fresher_jobs()),
            _ => None,
        }
    }

    /// Expand the profile into its ordered query list
    pub fn queries(&self) -> Vec<QuerySpec> {
        self.terms
            .iter()
            .map(|term| QuerySpec {
                term: term.clone(),
                location: self.location.clone(),
                google_domain: self.google_domain.clone(),
                no_cache: self.no_cache,
            })
            .collect()
    }

    /// Resolve a comma-separated list of built-in profile names
    pub fn builtins_from_list(names: &str) -> Result<Vec<Self>> {
        let profiles = names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                Self::builtin(name).with_context(|| format!("Unknown query profile: {}", name))
            })
            .collect::<Result<Vec<_>>>()?;
        validate_profiles(&profiles)?;
        Ok(profiles)
    }

    /// Load profiles from a JSON array file
    pub fn load_from_file(path: &Path) -> Result<Vec<Self>> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query profiles from {}", path.display()))?;
        let profiles: Vec<Self> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid query profiles in {}", path.display()))?;
        validate_profiles(&profiles)?;
        Ok(profiles)
    }
}

fn validate_profiles(profiles: &[QueryProfile]) -> Result<()> {
    if profiles.is_empty() {
        bail!("At least one query profile must be configured");
    }

    let mut seen = HashSet::new();
    for profile in profiles {
        if profile.name.trim().is_empty() {
            bail!("Query profile names must not be empty");
        }
        if !seen.insert(profile.name.as_str()) {
            bail!("Duplicate query profile name: {}", profile.name);
        }
        if profile.schedule.trim().is_empty() {
            bail!("Query profile {} has no schedule", profile.name);
        }
        Schedule::from_str(&profile.schedule).with_context(|| {
            format!(
                "Invalid schedule '{}' for query profile {}",
                profile.schedule, profile.name
            )
        })?;
    }
    Ok(())
}
