//! Parse failure type shared by the field parser and value-object
//! constructors.

use crate::model::contact::{Email, Name, Phone};
use crate::model::event::EventName;
use crate::model::tag::Tag;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message for index input that is not a non-zero unsigned integer.
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
/// Message for date input that is not a calendar date in `yyyy-MM-dd`.
pub const MESSAGE_INVALID_DATE: &str = "Invalid date format! Expected format: yyyy-MM-dd";
/// Message for time input that is not a time of day in `HH:mm`.
pub const MESSAGE_INVALID_TIME: &str = "Invalid time format! Expected format: HH:mm";
/// Message for any malformed duration input.
pub const MESSAGE_INVALID_DURATION: &str =
    "Invalid duration format! Expected format: XhYm (e.g., 1h30m)";

/// User-facing rejection of malformed field input.
///
/// Each variant maps to exactly one fixed message, so callers can display
/// `to_string()` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    InvalidIndex,
    InvalidName,
    InvalidPhone,
    InvalidEmail,
    InvalidTag,
    InvalidDate,
    InvalidTime,
    /// Covers bad hours, bad minutes, missing `m` and extra `h` alike.
    InvalidDuration,
    EmptyEvent,
}

impl ParseError {
    /// Returns the fixed human-readable message for this failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidIndex => MESSAGE_INVALID_INDEX,
            Self::InvalidName => Name::MESSAGE_CONSTRAINTS,
            Self::InvalidPhone => Phone::MESSAGE_CONSTRAINTS,
            Self::InvalidEmail => Email::MESSAGE_CONSTRAINTS,
            Self::InvalidTag => Tag::MESSAGE_CONSTRAINTS,
            Self::InvalidDate => MESSAGE_INVALID_DATE,
            Self::InvalidTime => MESSAGE_INVALID_TIME,
            Self::InvalidDuration => MESSAGE_INVALID_DURATION,
            Self::EmptyEvent => EventName::MESSAGE_CONSTRAINTS,
        }
    }

    /// Returns the field name used in diagnostics, never the input itself.
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidIndex => "index",
            Self::InvalidName => "name",
            Self::InvalidPhone => "phone",
            Self::InvalidEmail => "email",
            Self::InvalidTag => "tag",
            Self::InvalidDate => "date",
            Self::InvalidTime => "time",
            Self::InvalidDuration => "duration",
            Self::EmptyEvent => "event",
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ParseError {}
