pub mod job_posting;
pub mod query_profile;

pub use job_posting::*;
pub use query_profile::*;
