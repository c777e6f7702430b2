use std::rc::Rc;

use household_core::{Entity, FamilyId};

use crate::person::PersonRef;

/// Minimum age a member needs before the family may take in a child.
pub const PARENTING_AGE: u32 = 21;

/// Aggregate: Family (an ordered list of shared person handles).
///
/// Members are never removed. The same person may appear more than once.
#[derive(Debug)]
pub struct Family {
    id: FamilyId,
    members: Vec<PersonRef>,
}

impl Family {
    /// Found a family from two spouses and link them to each other.
    ///
    /// If either of them already has a spouse, the family is returned with no
    /// members and nobody is linked. Check [`Family::is_formed`].
    ///
    /// Linking goes through [`Person::set_spouse`](crate::Person::set_spouse),
    /// so a minor founder is still a member but keeps no spouse link.
    pub fn new(spouse1: &PersonRef, spouse2: &PersonRef) -> Self {
        let mut family = Self {
            id: FamilyId::new(),
            members: Vec::new(),
        };

        let already_married =
            spouse1.borrow().spouse().is_some() || spouse2.borrow().spouse().is_some();
        if already_married {
            return family;
        }

        spouse1.borrow_mut().set_spouse(Some(spouse2));
        spouse2.borrow_mut().set_spouse(Some(spouse1));
        family.members.extend([Rc::clone(spouse1), Rc::clone(spouse2)]);
        family
    }

    pub fn members(&self) -> &[PersonRef] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether founding succeeded (the founders were both unmarried).
    pub fn is_formed(&self) -> bool {
        !self.is_empty()
    }

    /// Sum of every member's annual income. Members without a job add nothing.
    pub fn household_income(&self) -> i64 {
        let mut total = 0;
        for member in &self.members {
            let member = member.borrow();
            if let Some(job) = member.job() {
                total += job.borrow().annual_income();
            }
        }
        total
    }

    /// Take in a child if some member is at least [`PARENTING_AGE`].
    ///
    /// Nothing is checked about the child itself.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        let eligible = self
            .members
            .iter()
            .any(|member| member.borrow().age() >= PARENTING_AGE);

        if eligible {
            self.members.push(child);
        }
        eligible
    }
}

impl Entity for Family {
    type Id = FamilyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
