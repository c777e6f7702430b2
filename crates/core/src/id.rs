//! Strongly-typed identifiers used across the domain.

use uuid::Uuid;

/// Identifier of a person.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PersonId(Uuid);

/// Identifier of a job (employment record).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

/// Identifier of a family (household).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FamilyId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty) => {
        impl $t {
            /// Fresh, time-ordered (UUIDv7) identifier.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

impl_uuid_newtype!(PersonId);
impl_uuid_newtype!(JobId);
impl_uuid_newtype!(FamilyId);
