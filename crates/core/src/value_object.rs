//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. `Money` is the value object of this domain.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// an operation returns a new instance:
///
/// ```ignore
/// let total = wallet.add(&tip);   // `wallet` is unchanged
/// ```
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied
/// into results, compared in assertions and printed in test failures.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
