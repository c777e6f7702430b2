use serde::{Deserialize, Serialize};

use household_core::{Entity, JobId};

/// Hours in a working year, used when income is computed without an explicit
/// hour count.
pub const DEFAULT_ANNUAL_HOURS: i64 = 2000;

/// Compensation scheme of a job. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    /// Hourly wage.
    Hourly(f64),
    /// Annual salary.
    Salary(u64),
}

impl core::fmt::Display for JobType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            // `{:?}` keeps the fractional part (`15.0`, not `15`).
            JobType::Hourly(rate) => write!(f, "Hourly({rate:?})"),
            JobType::Salary(annual) => write!(f, "Salary({annual})"),
        }
    }
}

/// Entity: Job (a title plus a compensation scheme).
#[derive(Debug, PartialEq)]
pub struct Job {
    id: JobId,
    title: String,
    kind: JobType,
}

impl Job {
    pub fn new(title: impl Into<String>, kind: JobType) -> Self {
        Self {
            id: JobId::new(),
            title: title.into(),
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> JobType {
        self.kind
    }

    /// Raise by a fraction of the current pay (`0.1` is 10%).
    ///
    /// Salaries add the truncated raise; a negative result clamps to zero.
    pub fn raise_by_percent(&mut self, percent: f64) {
        self.kind = match self.kind {
            JobType::Hourly(rate) => JobType::Hourly(rate + rate * percent),
            JobType::Salary(annual) => {
                let raise = (annual as f64 * percent) as u64;
                JobType::Salary(annual.saturating_add(raise))
            }
        };
    }

    /// Raise by a flat amount (per hour for hourly jobs, per year for salaries).
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.kind = match self.kind {
            JobType::Hourly(rate) => JobType::Hourly(rate + amount),
            JobType::Salary(annual) => JobType::Salary(annual.saturating_add(amount as u64)),
        };
    }

    /// Income for `hours` worked. Salaries ignore the hour count.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.kind {
            JobType::Hourly(rate) => (rate * hours as f64) as i64,
            JobType::Salary(annual) => i64::try_from(annual).unwrap_or(i64::MAX),
        }
    }

    /// Income over [`DEFAULT_ANNUAL_HOURS`].
    pub fn annual_income(&self) -> i64 {
        self.calculate_income(DEFAULT_ANNUAL_HOURS)
    }
}

impl Entity for Job {
    type Id = JobId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
