use anyhow::Context;
use tracing::info;

use household_observability::LogFormat;
use household_report::config::LOG_FORMAT_VAR;
use household_report::{HouseholdFixture, HouseholdReport, ReportConfig};

fn main() -> anyhow::Result<()> {
    let format = std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|name| LogFormat::from_name(&name))
        .unwrap_or_default();
    household_observability::tracing::init(format);

    let mut config = ReportConfig::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_fixture(path);
    }

    let path = config.fixture_path()?;
    info!(fixture = %path.display(), currency = %config.currency, "loading household");

    let fixture = HouseholdFixture::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let report = HouseholdReport::run(&fixture, config.currency);

    println!("{report}");
    Ok(())
}
