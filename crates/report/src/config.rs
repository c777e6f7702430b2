//! Report configuration, read from the environment.

use std::path::{Path, PathBuf};

use household_money::Currency;
use thiserror::Error;
use tracing::warn;

pub const FIXTURE_VAR: &str = "HOUSEHOLD_FIXTURE";
pub const CURRENCY_VAR: &str = "HOUSEHOLD_REPORT_CURRENCY";
pub const LOG_FORMAT_VAR: &str = "HOUSEHOLD_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no household fixture given (pass a path or set HOUSEHOLD_FIXTURE)")]
    MissingFixture,
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Path of the JSON household description
    pub fixture: Option<PathBuf>,
    /// Currency the household income is reported in
    pub currency: Currency,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fixture: None,
            currency: Currency::Usd,
        }
    }
}

impl ReportConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (environment-shaped key/value source).
    ///
    /// An unknown report currency is logged and replaced by USD.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(FIXTURE_VAR).filter(|p| !p.trim().is_empty()) {
            config.fixture = Some(PathBuf::from(path));
        }

        if let Some(code) = lookup(CURRENCY_VAR) {
            match code.trim().parse::<Currency>() {
                Ok(currency) => config.currency = currency,
                Err(e) => warn!(error = %e, "{CURRENCY_VAR} not usable; reporting in USD"),
            }
        }

        config
    }

    pub fn with_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn fixture_path(&self) -> Result<&Path, ConfigError> {
        self.fixture.as_deref().ok_or(ConfigError::MissingFixture)
    }
}
