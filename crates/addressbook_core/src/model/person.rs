//! Person aggregate.
//!
//! # Responsibility
//! - Group a contact's validated fields into one immutable record.
//! - Define the identity rule used to detect duplicate contacts.
//!
//! # Invariants
//! - Every field is a validated value object; `Person` adds no checks of
//!   its own.
//! - Two persons are the *same contact* when their names are equal, even if
//!   other fields differ. Full equality (`==`) compares every field.

use crate::model::contact::{Email, Name, Phone};
use crate::model::tag::Tag;
use crate::util::contains_word_ignore_case;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Contact record: student details plus a parent's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    parent_phone: Phone,
    email: Email,
    /// Sorted for deterministic display and serialization.
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        parent_phone: Phone,
        email: Email,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            parent_phone,
            email,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn parent_phone(&self) -> &Phone {
        &self.parent_phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns whether `other` refers to the same contact (same name).
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// Returns whether any word of the name equals `keyword`, ignoring case.
    pub fn name_matches_keyword(&self, keyword: &str) -> bool {
        contains_word_ignore_case(self.name.as_str(), keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::Person;
    use crate::model::contact::{Email, Name, Phone};
    use crate::model::tag::Tag;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::try_new(name).unwrap(),
            Phone::try_new(phone).unwrap(),
            Phone::try_new("94351253").unwrap(),
            Email::try_new("someone@example.com").unwrap(),
            [Tag::try_new("friends").unwrap(), Tag::try_new("friends").unwrap()],
        )
    }

    #[test]
    fn duplicate_tags_collapse() {
        assert_eq!(person("Alice Pauline", "94351253").tags().len(), 1);
    }

    #[test]
    fn same_person_is_decided_by_name_only() {
        let original = person("Alice Pauline", "94351253");
        let other_phone = person("Alice Pauline", "11111111");
        let other_name = person("Alice Paulina", "94351253");

        assert!(original.is_same_person(&other_phone));
        assert_ne!(original, other_phone);
        assert!(!original.is_same_person(&other_name));
    }

    #[test]
    fn keyword_matches_whole_name_words() {
        let benson = person("Benson Meier", "98765432");
        assert!(benson.name_matches_keyword("meier"));
        assert!(!benson.name_matches_keyword("Mei"));
    }
}
