//! In-memory contact list.
//!
//! # Responsibility
//! - Hold persons in insertion order.
//! - Reject duplicate contacts on every insertion path.
//!
//! # Invariants
//! - No two stored persons satisfy `Person::is_same_person`.
//! - Deserialization goes through the same duplicate check as `add_person`.

use crate::model::index::Index;
use crate::model::person::Person;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from address book mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A person with the same identity is already stored.
    DuplicatePerson(Person),
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(person) => write!(
                f,
                "this person already exists in the address book: {}",
                person.name()
            ),
        }
    }
}

impl Error for AddressBookError {}

/// Ordered collection of unique contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Person>", into = "Vec<Person>")]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `person` unless the same contact is already stored.
    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        if self.has_person(&person) {
            warn!(
                "event=person_add module=address_book status=rejected reason=duplicate size={}",
                self.persons.len()
            );
            return Err(AddressBookError::DuplicatePerson(person));
        }

        self.persons.push(person);
        debug!(
            "event=person_add module=address_book status=ok size={}",
            self.persons.len()
        );
        Ok(())
    }

    /// Returns whether a person with the same identity as `person` exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|stored| stored.is_same_person(person))
    }

    /// Returns all persons in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Returns the person at a displayed (one-based) position.
    pub fn get(&self, index: Index) -> Option<&Person> {
        self.persons.get(index.zero_based())
    }

    /// Returns persons whose name contains `keyword` as a whole word,
    /// ignoring case, in insertion order.
    pub fn find_by_name_keyword(&self, keyword: &str) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| person.name_matches_keyword(keyword))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl TryFrom<Vec<Person>> for AddressBook {
    type Error = AddressBookError;

    fn try_from(persons: Vec<Person>) -> Result<Self, Self::Error> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }
}

impl From<AddressBook> for Vec<Person> {
    fn from(book: AddressBook) -> Self {
        book.persons
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, AddressBookError};
    use crate::model::contact::{Email, Name, Phone};
    use crate::model::index::Index;
    use crate::model::person::Person;

    fn person(name: &str) -> Person {
        Person::new(
            Name::try_new(name).unwrap(),
            Phone::try_new("12345678").unwrap(),
            Phone::try_new("87654321").unwrap(),
            Email::try_new("someone@example.com").unwrap(),
            [],
        )
    }

    #[test]
    fn new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(book.persons().is_empty());
    }

    #[test]
    fn add_person_rejects_same_identity() {
        let mut book = AddressBook::new();
        book.add_person(person("Carl Kurz")).unwrap();

        let err = book.add_person(person("Carl Kurz")).unwrap_err();
        assert_eq!(err, AddressBookError::DuplicatePerson(person("Carl Kurz")));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn get_uses_one_based_positions() {
        let mut book = AddressBook::new();
        book.add_person(person("Carl Kurz")).unwrap();
        book.add_person(person("Elle Meyer")).unwrap();

        let second = book.get(Index::from_one_based(2).unwrap()).unwrap();
        assert_eq!(second.name().as_str(), "Elle Meyer");
        assert!(book.get(Index::from_one_based(3).unwrap()).is_none());
    }
}
