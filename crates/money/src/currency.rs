use core::str::FromStr;

use serde::{Deserialize, Serialize};

use household_core::{DomainError, DomainResult};

/// The closed set of supported currencies.
///
/// Codes are exchanged as the literal strings `"USD"`, `"EUR"`, `"GBP"` and
/// `"CAN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Can,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Can];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Can => "CAN",
        }
    }

    /// Parse a code, returning `None` for anything outside the closed set.
    ///
    /// Matching is exact: `"usd"` is not a currency.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Lenient parse: unknown codes fall back to USD.
    pub fn parse_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::from_code(s)
            .ok_or_else(|| DomainError::validation(format!("unknown currency code: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_the_wire_literals() {
        let codes: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["USD", "EUR", "GBP", "CAN"]);
    }

    #[test]
    fn lenient_parse_falls_back_to_usd() {
        assert_eq!(Currency::parse_or_default("GBP"), Currency::Gbp);
        assert_eq!(Currency::parse_or_default("XYZ"), Currency::Usd);
        assert_eq!(Currency::parse_or_default("gbp"), Currency::Usd);
        assert_eq!(Currency::parse_or_default(""), Currency::Usd);
    }

    #[test]
    fn strict_parse_rejects_unknown_code() {
        assert_eq!("CAN".parse::<Currency>().unwrap(), Currency::Can);

        let err = "CAD".parse::<Currency>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("CAD")),
            _ => panic!("Expected Validation error for unknown code"),
        }
    }

    #[test]
    fn serde_uses_uppercase_codes() {
        assert_eq!(serde_json::to_string(&Currency::Can).unwrap(), "\"CAN\"");
        let eur: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(eur, Currency::Eur);
    }
}
