//! Employment module (jobs and their compensation schemes).
//!
//! Pure domain logic only: no IO, no logging.

pub mod job;

pub use job::{DEFAULT_ANNUAL_HOURS, Job, JobType};
