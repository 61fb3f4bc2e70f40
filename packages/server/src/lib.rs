// Job Fetcher - Server Core
//
// Periodically pulls job listings from the SerpApi google_jobs engine,
// normalizes them and stores each posting once, keyed by its job id.
//
// Domain logic lives in domains/, infrastructure seams in kernel/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
