//! People domain module (persons and the families they form).
//!
//! Persons and families are shared, mutable handles (`Rc<RefCell<_>>`): a
//! family holds its members, a person points back at a spouse without owning
//! them. Single-threaded by construction.
//!
//! Every rule here fails silently: under-age assignments are dropped, a family
//! founded by someone already married stays empty, and an ineligible child
//! admission only reports `false`.

pub mod family;
pub mod person;

pub use family::{Family, PARENTING_AGE};
pub use person::{ADULT_AGE, JobRef, Person, PersonRef};
