//! Contact detail value objects: `Name`, `Phone` and `Email`.
//!
//! # Invariants
//! - Wrapped strings always match the type's validation regex.
//! - Constructors do not normalize; callers (the field parser) trim and
//!   collapse whitespace before construction.

use crate::parser::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let alnum = "[A-Za-z0-9]+";
    let local_part = format!(r"{alnum}(?:[+_.\-]{alnum})*");
    let domain_label = format!("{alnum}(?:-{alnum})*");
    let pattern = format!(r"^{local_part}@(?:{domain_label}\.)*(?:{domain_label}){{2,}}$");
    Regex::new(&pattern).expect("valid email regex")
});

/// Contact display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Returns whether `value` is a valid name: alphanumeric words separated
    /// by spaces, not starting with a space.
    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::InvalidName);
        }
        Ok(Self(value))
    }
}

string_value_object!(Name);

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::InvalidPhone);
        }
        Ok(Self(value))
    }
}

string_value_object!(Phone);

/// Email address in `local-part@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn is_valid(value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, ParseError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::InvalidEmail);
        }
        Ok(Self(value))
    }
}

string_value_object!(Email);

#[cfg(test)]
mod tests {
    use super::{Email, Name, Phone};
    use crate::parser::ParseError;

    #[test]
    fn name_accepts_alphanumeric_words() {
        for value in [
            "peter jack",
            "12345",
            "peter the 2nd",
            "Capital Tan",
            "David Roger Jackson Ray Jr 2nd",
        ] {
            assert!(Name::is_valid(value), "`{value}` should be a valid name");
        }
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        for value in ["", " ", "^", "peter*", " leading"] {
            assert!(!Name::is_valid(value), "`{value}` should be rejected");
        }
        assert_eq!(Name::try_new("peter*"), Err(ParseError::InvalidName));
    }

    #[test]
    fn phone_requires_three_or_more_digits() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("phone"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));
    }

    #[test]
    fn email_accepts_common_shapes() {
        for value in [
            "PeterJack_1190@example.com",
            "a@bc",
            "test@localhost",
            "a1+be.d@example1.com",
            "peter_jack@very-very-very-long-example.com",
            "e1234567@u.nus.edu",
        ] {
            assert!(Email::is_valid(value), "`{value}` should be a valid email");
        }
    }

    #[test]
    fn email_rejects_malformed_parts() {
        for value in [
            "",
            "@example.com",
            "peterjack@",
            "peterjackexample.com",
            "peter jack@example.com",
            "-peterjack@example.com",
            "peterjack-@example.com",
            "peter..jack@example.com",
            "peterjack@example.c",
            "peterjack@-example.com",
            "peterjack@example.com-",
            "peterjack@example_com",
            "peter@jack@example.com",
        ] {
            assert!(!Email::is_valid(value), "`{value}` should be rejected");
        }
    }

    #[test]
    fn serde_rejects_invalid_wrapped_value() {
        let err = serde_json::from_str::<Phone>("\"12\"").unwrap_err();
        assert!(err.to_string().contains("at least 3 digits"));

        let phone: Phone = serde_json::from_str("\"98765432\"").unwrap();
        assert_eq!(phone.as_str(), "98765432");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"98765432\"");
    }
}
