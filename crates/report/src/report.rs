//! Running a household fixture and rendering the outcome.

use household_money::{Currency, Money};
use household_people::Family;
use tracing::{debug, info};

use crate::fixture::HouseholdFixture;

/// Incomes are computed in this currency before conversion for display.
pub const BASE_CURRENCY: Currency = Currency::Usd;

/// Outcome of one child admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub first_name: String,
    pub admitted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdReport {
    /// Whether the founders could be linked as spouses
    pub formed: bool,
    /// Rendering of each member, in member order
    pub members: Vec<String>,
    pub admissions: Vec<Admission>,
    /// Household income in the requested currency
    pub income: Money,
}

impl HouseholdReport {
    pub fn run(fixture: &HouseholdFixture, currency: Currency) -> Self {
        let [first, second] = &fixture.spouses;
        let mut family = Family::new(&first.build(), &second.build());
        debug!(members = family.len(), "family founded");

        let admissions = fixture
            .children
            .iter()
            .map(|child| Admission {
                first_name: child.first_name.clone(),
                admitted: family.have_child(child.build()),
            })
            .collect();

        let income = Money::of(family.household_income(), BASE_CURRENCY).convert_to(currency);
        info!(
            formed = family.is_formed(),
            members = family.len(),
            income = %income,
            "household evaluated"
        );

        Self {
            formed: family.is_formed(),
            members: family
                .members()
                .iter()
                .map(|member| member.borrow().describe())
                .collect(),
            admissions,
            income,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for HouseholdReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.formed {
            writeln!(f, "family not formed: a founder is already married")?;
        }
        for member in &self.members {
            writeln!(f, "{member}")?;
        }
        for admission in &self.admissions {
            let outcome = if admission.admitted { "admitted" } else { "refused" };
            writeln!(f, "child {}: {outcome}", admission.first_name)?;
        }
        write!(f, "household income: {}", self.income)
    }
}
