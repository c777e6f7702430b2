//! Household report: loads a household description, runs it through the
//! domain model and renders the outcome.
//!
//! This is an outer collaborator of the domain crates. It is the only place
//! that reads configuration, touches the filesystem or logs.

pub mod config;
pub mod fixture;
pub mod report;

pub use config::{ConfigError, ReportConfig};
pub use fixture::{FixtureError, HouseholdFixture, JobFixture, PersonFixture};
pub use report::{Admission, HouseholdReport};
