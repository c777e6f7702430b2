//! `household-core` — shared building blocks for the household domain.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{FamilyId, JobId, PersonId};
pub use value_object::ValueObject;
