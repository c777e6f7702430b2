//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Jobs, persons and families are entities: they are mutated in place and two
/// of them with identical attributes are still different things.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
