use std::cell::RefCell;
use std::rc::Rc;

use household_core::{Entity, PersonId};
use household_employment::Job;

/// Minimum age for having a spouse or a job assigned.
pub const ADULT_AGE: u32 = 18;

/// Shared handle to a person (family members, spouses).
pub type PersonRef = Rc<RefCell<Person>>;

/// Shared handle to a job.
///
/// Nothing stops two persons from holding the same job; callers are expected
/// not to do that.
pub type JobRef = Rc<RefCell<Job>>;

/// Entity: Person.
///
/// The spouse link is a strong handle: a stored spouse stays readable for as
/// long as this person exists. Setting it on one side never touches the other
/// side. A married pair references each other, so the pair is only freed once
/// one side clears its link (`set_spouse(None)`).
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u32,
    spouse: Option<PersonRef>,
    job: Option<JobRef>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            spouse: None,
            job: None,
        }
    }

    /// Wrap into a shared handle.
    pub fn into_shared(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Change the age. Links stored earlier are kept even if the new age is
    /// below [`ADULT_AGE`].
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// The stored spouse, if any. Not gated by age.
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.clone()
    }

    /// Assign (or clear) the spouse. Ignored below [`ADULT_AGE`].
    pub fn set_spouse(&mut self, spouse: Option<&PersonRef>) {
        if !self.is_adult() {
            return;
        }
        self.spouse = spouse.map(Rc::clone);
    }

    /// The stored job, if any. Not gated by age.
    pub fn job(&self) -> Option<&JobRef> {
        self.job.as_ref()
    }

    /// Assign (or clear) the job. Ignored below [`ADULT_AGE`].
    pub fn set_job(&mut self, job: Option<JobRef>) {
        if !self.is_adult() {
            return;
        }
        self.job = job;
    }

    /// One-line description with name, age, compensation and spouse.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// Spouses point at each other, so the derived form would recurse forever.
impl core::fmt::Debug for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let spouse = self.spouse.as_ref().map(|spouse| match spouse.try_borrow() {
            Ok(spouse) => format!("{:?}", spouse.id),
            Err(_) => "<borrowed>".to_string(),
        });
        f.debug_struct("Person")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("age", &self.age)
            .field("spouse", &spouse)
            .field("job", &self.job)
            .finish()
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let job = match &self.job {
            Some(job) => job.borrow().kind().to_string(),
            None => "nil".to_string(),
        };
        let spouse = match self.spouse() {
            Some(spouse) => {
                let spouse = spouse.borrow();
                spouse.first_name.clone()
            }
            None => "nil".to_string(),
        };

        write!(
            f,
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            self.first_name, self.last_name, self.age, job, spouse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use household_employment::JobType;

    fn job(kind: JobType) -> JobRef {
        Rc::new(RefCell::new(Job::new("Lecturer", kind)))
    }

    #[test]
    fn minor_cannot_take_a_spouse() {
        let teen = Person::new("Matt", "Neward", 16).into_shared();
        let partner = Person::new("Sam", "Lee", 16).into_shared();

        teen.borrow_mut().set_spouse(Some(&partner));
        assert!(teen.borrow().spouse().is_none());
    }

    #[test]
    fn adult_takes_a_spouse_one_sided() {
        let ted = Person::new("Ted", "Neward", 18).into_shared();
        let charlotte = Person::new("Charlotte", "Neward", 18).into_shared();

        ted.borrow_mut().set_spouse(Some(&charlotte));

        let spouse = ted.borrow().spouse().unwrap();
        assert!(Rc::ptr_eq(&spouse, &charlotte));
        assert!(charlotte.borrow().spouse().is_none());
    }

    #[test]
    fn minor_cannot_take_a_job() {
        let mut teen = Person::new("Matt", "Neward", 17);
        teen.set_job(Some(job(JobType::Hourly(15.0))));
        assert!(teen.job().is_none());
    }

    #[test]
    fn minor_cannot_clear_existing_links() {
        let mut p = Person::new("Ted", "Neward", 18);
        let held = job(JobType::Salary(1000));
        p.set_job(Some(held.clone()));

        p.set_age(17);
        p.set_job(None);

        let stored = p.job().unwrap();
        assert!(Rc::ptr_eq(stored, &held));
    }

    #[test]
    fn adult_can_replace_and_clear_job() {
        let mut p = Person::new("Ted", "Neward", 45);
        p.set_job(Some(job(JobType::Salary(1000))));
        p.set_job(Some(job(JobType::Hourly(20.0))));
        assert_eq!(p.job().unwrap().borrow().kind(), JobType::Hourly(20.0));

        p.set_job(None);
        assert!(p.job().is_none());
    }

    #[test]
    fn spouse_outlives_the_callers_handle() {
        let ted = Person::new("Ted", "Neward", 30).into_shared();
        ted.borrow_mut()
            .set_spouse(Some(&Person::new("Ex", "Partner", 30).into_shared()));

        let spouse = ted.borrow().spouse().unwrap();
        assert_eq!(spouse.borrow().first_name(), "Ex");
        assert!(ted.borrow().describe().ends_with("spouse:Ex]"));
    }

    #[test]
    fn debug_output_of_married_pair_terminates() {
        let ted = Person::new("Ted", "Neward", 30).into_shared();
        let charlotte = Person::new("Charlotte", "Neward", 30).into_shared();
        ted.borrow_mut().set_spouse(Some(&charlotte));
        charlotte.borrow_mut().set_spouse(Some(&ted));

        let rendered = format!("{:?}", ted.borrow());
        let charlotte_id = format!("{:?}", charlotte.borrow().id());
        assert!(rendered.contains(&charlotte_id));
    }

    #[test]
    fn description_without_links() {
        let p = Person::new("Matt", "Neward", 15);
        assert_eq!(
            p.describe(),
            "[Person: firstName:Matt lastName:Neward age:15 job:nil spouse:nil]"
        );
    }

    #[test]
    fn description_with_job_and_spouse() {
        let ted = Person::new("Ted", "Neward", 45).into_shared();
        let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
        ted.borrow_mut().set_job(Some(job(JobType::Salary(1000))));
        ted.borrow_mut().set_spouse(Some(&charlotte));

        assert_eq!(
            ted.borrow().to_string(),
            "[Person: firstName:Ted lastName:Neward age:45 job:Salary(1000) spouse:Charlotte]"
        );
    }

    #[test]
    fn description_shows_hourly_rate_with_fraction() {
        let mut p = Person::new("Mike", "Neward", 22);
        p.set_job(Some(job(JobType::Hourly(15.0))));
        assert!(p.describe().contains("job:Hourly(15.0)"));
    }

    #[test]
    fn ids_are_unique_per_person() {
        let a = Person::new("A", "B", 30);
        let b = Person::new("A", "B", 30);
        assert_ne!(a.id(), b.id());
    }
}
