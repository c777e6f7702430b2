//! JSON household descriptions.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use household_employment::{Job, JobType};
use household_people::{Person, PersonRef};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFixture {
    pub title: String,
    pub kind: JobType,
    /// Fractional raises applied in order after hiring (`0.1` is 10%).
    #[serde(default)]
    pub raises_by_percent: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonFixture {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default)]
    pub job: Option<JobFixture>,
    /// First name of a spouse from outside the household, if already married.
    #[serde(default)]
    pub married_to: Option<String>,
}

/// Two founding spouses plus the children to admit, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdFixture {
    pub spouses: [PersonFixture; 2],
    #[serde(default)]
    pub children: Vec<PersonFixture>,
}

impl HouseholdFixture {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl PersonFixture {
    /// Build the person. Job and spouse go through the age-gated setters, so a
    /// minor's links are dropped like any other under-age assignment.
    pub fn build(&self) -> PersonRef {
        let person = Person::new(&self.first_name, &self.last_name, self.age).into_shared();
        if let Some(job) = &self.job {
            person.borrow_mut().set_job(Some(job.build()));
        }
        if let Some(name) = &self.married_to {
            let spouse = Person::new(name, &self.last_name, self.age).into_shared();
            person.borrow_mut().set_spouse(Some(&spouse));
        }
        person
    }
}

impl JobFixture {
    pub fn build(&self) -> Rc<RefCell<Job>> {
        let mut job = Job::new(&self.title, self.kind);
        debug!(title = job.title(), raises = self.raises_by_percent.len(), "hiring");
        for percent in &self.raises_by_percent {
            job.raise_by_percent(*percent);
        }
        Rc::new(RefCell::new(job))
    }
}
