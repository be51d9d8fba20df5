use crate::model::contact::{Email, Name, Phone};
use crate::model::person::Person;
use crate::model::tag::Tag;
use crate::parser::ParseError;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_PARENT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";

/// Builds `Person` values for tests, filling unset fields with defaults.
///
/// Field values are kept as raw strings until `build`, so a builder can be
/// prepared with invalid input to exercise validation paths through
/// `try_build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    parent_phone: String,
    email: String,
    tags: Vec<String>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            parent_phone: DEFAULT_PARENT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            tags: Vec::new(),
        }
    }
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the fields of an existing person.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            parent_phone: person.parent_phone().to_string(),
            email: person.email().to_string(),
            tags: person.tags().iter().map(Tag::to_string).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_parent_phone(mut self, parent_phone: impl Into<String>) -> Self {
        self.parent_phone = parent_phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Replaces the tag list. Duplicates collapse when the person is built.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the person, returning the first field validation failure.
    pub fn try_build(&self) -> Result<Person, ParseError> {
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::try_new(tag.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Person::new(
            Name::try_new(self.name.as_str())?,
            Phone::try_new(self.phone.as_str())?,
            Phone::try_new(self.parent_phone.as_str())?,
            Email::try_new(self.email.as_str())?,
            tags,
        ))
    }

    /// Builds the person.
    ///
    /// # Panics
    /// Panics when a field holds an invalid value. Fixture literals are
    /// programmer-controlled, so this is a bug in the fixture, not input.
    pub fn build(&self) -> Person {
        match self.try_build() {
            Ok(person) => person,
            Err(err) => panic!("invalid fixture person `{}`: {err}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PersonBuilder, DEFAULT_EMAIL, DEFAULT_NAME};
    use crate::parser::ParseError;

    #[test]
    fn defaults_fill_unset_fields() {
        let person = PersonBuilder::new().build();
        assert_eq!(person.name().as_str(), DEFAULT_NAME);
        assert_eq!(person.email().as_str(), DEFAULT_EMAIL);
        assert!(person.tags().is_empty());
    }

    #[test]
    fn from_person_round_trips_all_fields() {
        let original = PersonBuilder::new()
            .with_name("Hoon Meier")
            .with_tags(["owesMoney", "friends"])
            .build();
        assert_eq!(PersonBuilder::from_person(&original).build(), original);
    }

    #[test]
    fn try_build_reports_invalid_fields() {
        let err = PersonBuilder::new()
            .with_email("not-an-email")
            .try_build()
            .unwrap_err();
        assert_eq!(err, ParseError::InvalidEmail);

        let err = PersonBuilder::new()
            .with_tags(["best friend"])
            .try_build()
            .unwrap_err();
        assert_eq!(err, ParseError::InvalidTag);
    }
}
