use super::*;
use tracing::debug;

/// People held in memory for one run, always ordered by surname once
/// anything has been added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PeopleBook {
    people: Vec<Person>,
}

impl PeopleBook {
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    /// Wraps people in the order given. Loaded files are not resorted.
    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Appends a person and restores surname order. Duplicates are kept.
    pub fn add(&mut self, person: Person) -> &[Person] {
        debug!(surname = %person.surname, "adding person");

        self.people.push(person);
        // `sort_by` is stable: equal surnames keep insertion order
        self.people.sort_by(|a, b| a.surname.cmp(&b.surname));

        &self.people
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }
}
