//! Event name value object for scheduling fields.

use crate::parser::ParseError;
use serde::{Deserialize, Serialize};

/// Free-text name of a scheduled event.
///
/// # Invariants
/// - Never empty and never surrounded by whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(String);

impl EventName {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Event name cannot be empty!";

    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.trim() == value
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::EmptyEvent);
        }
        Ok(Self(value))
    }
}

string_value_object!(EventName);

#[cfg(test)]
mod tests {
    use super::EventName;
    use crate::parser::ParseError;

    #[test]
    fn event_name_rejects_empty_and_padded_values() {
        assert_eq!(EventName::try_new(""), Err(ParseError::EmptyEvent));
        assert_eq!(EventName::try_new(" Meeting"), Err(ParseError::EmptyEvent));
        assert_eq!(
            EventName::try_new("Parent meeting").unwrap().as_str(),
            "Parent meeting"
        );
    }
}
