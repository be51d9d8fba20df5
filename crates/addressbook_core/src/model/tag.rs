//! Contact tag value object.

use crate::parser::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Single alphanumeric label attached to a contact.
///
/// Tags compare case-sensitively: `friends` and `Friends` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(value: &str) -> bool {
        TAG_RE.is_match(value)
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::InvalidTag);
        }
        Ok(Self(value))
    }
}

string_value_object!(Tag);

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn tag_must_be_alphanumeric() {
        assert!(Tag::is_valid("friends"));
        assert!(Tag::is_valid("owesMoney2"));
        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid("best friend"));
        assert!(!Tag::is_valid("#friend"));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_ne!(Tag::try_new("friends"), Tag::try_new("Friends"));
    }
}
