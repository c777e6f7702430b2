//! Money module (amounts in a small closed set of currencies).
//!
//! Pure domain logic only: no IO, no logging. Conversions use a fixed rate table
//! with truncating integer arithmetic.

pub mod currency;
pub mod money;

pub use currency::Currency;
pub use money::Money;
