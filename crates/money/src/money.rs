use serde::{Deserialize, Deserializer, Serialize};

use household_core::ValueObject;

use crate::currency::Currency;

/// An amount of money in one of the supported currencies.
///
/// Every operation returns a new `Money`; nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    #[serde(deserialize_with = "lenient_currency")]
    currency: Currency,
}

impl ValueObject for Money {}

impl Money {
    /// Build from a currency code. Unknown codes silently become USD.
    pub fn new(amount: i64, code: &str) -> Self {
        Self::of(amount, Currency::parse_or_default(code))
    }

    pub fn of(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Convert into the currency named by `code`.
    ///
    /// A code outside the supported set is ignored and the value comes back
    /// unchanged.
    pub fn convert(&self, code: &str) -> Money {
        match Currency::from_code(code) {
            Some(target) => self.convert_to(target),
            None => *self,
        }
    }

    /// Convert using the fixed rate table.
    ///
    /// Pairs without a direct entry go through USD. Multiplication happens
    /// before the truncating division, so every intermediate product must fit
    /// in `i64`. The worst path is GBP to CAN (`amount * 2`, then `* 5`), which
    /// makes amounts up to `i64::MAX / 10` safe for any pair; beyond that the
    /// arithmetic overflows and panics in debug builds.
    pub fn convert_to(&self, target: Currency) -> Money {
        use Currency::*;

        if self.currency == target {
            return *self;
        }

        let amount = self.amount;
        let converted = match (self.currency, target) {
            (Usd, Gbp) => amount / 2,
            (Can, Usd) => amount * 4 / 5,
            (Usd, Can) => amount * 5 / 4,
            (Gbp, Usd) => amount * 2,
            (Usd, Eur) => amount * 3 / 2,
            (Eur, Usd) => amount * 2 / 3,
            // Every currency converts directly to and from USD, so two hops
            // always suffice.
            _ => return self.convert_to(Usd).convert_to(target),
        };

        Money::of(converted, target)
    }

    /// Add `other`, expressed in this value's currency.
    ///
    /// USD + GBP is the one exception: the left side is converted to GBP and
    /// the result is in GBP.
    ///
    /// Same overflow bound as [`Money::convert_to`]; the sum itself must also
    /// fit in `i64`.
    pub fn add(&self, other: &Money) -> Money {
        if self.currency == Currency::Usd && other.currency == Currency::Gbp {
            let in_gbp = self.convert_to(Currency::Gbp);
            return Money::of(in_gbp.amount + other.amount, Currency::Gbp);
        }

        let other = other.convert_to(self.currency);
        Money::of(self.amount + other.amount, self.currency)
    }

    /// Subtract `other`, expressed in this value's currency.
    ///
    /// Same overflow bound as [`Money::add`].
    pub fn subtract(&self, other: &Money) -> Money {
        let other = other.convert_to(self.currency);
        Money::of(self.amount - other.amount, self.currency)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

fn lenient_currency<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(Currency::parse_or_default(&code))
}
