//! Field parser: raw user strings to validated domain values.
//!
//! # Responsibility
//! - Normalize raw command arguments (trim, whitespace handling).
//! - Build value objects or return a `ParseError` carrying a fixed message.
//!
//! # Invariants
//! - Every function is pure and single-pass; no partial success.
//! - Diagnostics log the rejected field name only, never user input.
//! - Absent input cannot be expressed (`&str` is never null), so there is no
//!   run-time precondition check.

mod error;

pub use error::{
    ParseError, MESSAGE_INVALID_DATE, MESSAGE_INVALID_DURATION, MESSAGE_INVALID_INDEX,
    MESSAGE_INVALID_TIME,
};

use crate::model::contact::{Email, Name, Phone};
use crate::model::event::EventName;
use crate::model::index::Index;
use crate::model::tag::Tag;
use crate::util::is_non_zero_unsigned_integer;
use chrono::{NaiveDate, NaiveTime, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::time::Duration;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TIME_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]{1,9})?)?$").expect("valid time regex")
});

const SECONDS_PER_HOUR: u64 = 60 * 60;
const SECONDS_PER_MINUTE: u64 = 60;

/// Parses a one-based index. Surrounding whitespace is ignored.
pub fn parse_index(one_based_index: &str) -> Result<Index, ParseError> {
    let trimmed = one_based_index.trim();
    if !is_non_zero_unsigned_integer(trimmed) {
        return Err(rejected(ParseError::InvalidIndex));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| rejected(ParseError::InvalidIndex))
}

/// Parses a name. Whitespace runs collapse to a single space and the result
/// is trimmed.
pub fn parse_name(name: &str) -> Result<Name, ParseError> {
    let collapsed = WHITESPACE_RE.replace_all(name, " ");
    Name::try_new(collapsed.trim()).map_err(rejected)
}

/// Parses a phone number. All whitespace is removed, so `" 9876 5432 "`
/// becomes `98765432`.
pub fn parse_phone(phone: &str) -> Result<Phone, ParseError> {
    let compact = WHITESPACE_RE.replace_all(phone, "");
    Phone::try_new(compact.into_owned()).map_err(rejected)
}

/// Parses an email address. Surrounding whitespace is ignored.
pub fn parse_email(email: &str) -> Result<Email, ParseError> {
    Email::try_new(email.trim()).map_err(rejected)
}

/// Parses a single tag. Surrounding whitespace is ignored.
pub fn parse_tag(tag: &str) -> Result<Tag, ParseError> {
    Tag::try_new(tag.trim()).map_err(rejected)
}

/// Parses every tag in `tags` into a set.
///
/// Duplicates collapse; an empty input yields an empty set. The first
/// invalid tag aborts parsing with its error.
pub fn parse_tags<I, S>(tags: I) -> Result<BTreeSet<Tag>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| parse_tag(tag.as_ref()))
        .collect()
}

/// Parses an ISO calendar date (`yyyy-MM-dd`).
///
/// The input is not trimmed. Lexically valid but impossible dates such as
/// `2024-02-30` are rejected.
pub fn parse_date(date: &str) -> Result<NaiveDate, ParseError> {
    if !DATE_SHAPE_RE.is_match(date) {
        return Err(rejected(ParseError::InvalidDate));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| rejected(ParseError::InvalidDate))
}

/// Parses a 24-hour time of day (`HH:mm`, optionally `HH:mm:ss` with up to
/// nine fractional second digits, e.g. `10:15:30.5`).
///
/// The input is not trimmed.
pub fn parse_time(time: &str) -> Result<NaiveTime, ParseError> {
    let Some(captures) = TIME_SHAPE_RE.captures(time) else {
        return Err(rejected(ParseError::InvalidTime));
    };
    let format = if captures.get(1).is_some() {
        "%H:%M:%S%.f"
    } else {
        "%H:%M"
    };

    match NaiveTime::parse_from_str(time, format) {
        // Why: chrono accepts `:60` as a leap second and encodes it as
        // nanosecond overflow; a time-of-day field must stay within 00-59.
        Ok(parsed) if parsed.nanosecond() < 1_000_000_000 => Ok(parsed),
        _ => Err(rejected(ParseError::InvalidTime)),
    }
}

/// Parses a duration written as `<hours>h` or `<hours>h<minutes>m`.
///
/// The input is trimmed, then split on the first `h`. Input without any `h`
/// is read as a bare hour count (`"90"` is 90 hours). A non-empty remainder
/// must end in `m` with an unsigned minute count before it. Minutes above 59
/// are accepted (`1h90m` is 150 minutes). Counts may carry a leading `+`;
/// negative counts are rejected since `Duration` is unsigned.
///
/// Every malformed shape maps to the same `ParseError::InvalidDuration`.
pub fn parse_duration(duration: &str) -> Result<Duration, ParseError> {
    let invalid = || rejected(ParseError::InvalidDuration);

    let trimmed = duration.trim();
    // Why: only the first `h` splits, so a second `h` lands in the minutes
    // segment and fails its `m`-suffix or digit check instead of being
    // silently dropped.
    let (hours_part, minutes_part) = trimmed.split_once('h').unwrap_or((trimmed, ""));
    let hours = parse_count(hours_part).ok_or_else(invalid)?;

    let minutes_part = minutes_part.trim();
    let minutes = if minutes_part.is_empty() {
        0
    } else {
        let digits = minutes_part.strip_suffix('m').ok_or_else(invalid)?;
        parse_count(digits).ok_or_else(invalid)?
    };

    hours
        .checked_mul(SECONDS_PER_HOUR)
        .zip(minutes.checked_mul(SECONDS_PER_MINUTE))
        .and_then(|(hour_secs, minute_secs)| hour_secs.checked_add(minute_secs))
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}

/// Parses an event name. Surrounding whitespace is ignored and the result
/// must not be empty.
pub fn parse_event(event: &str) -> Result<EventName, ParseError> {
    EventName::try_new(event.trim()).map_err(rejected)
}

fn parse_count(segment: &str) -> Option<u64> {
    let trimmed = segment.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn rejected(err: ParseError) -> ParseError {
    debug!(
        "event=field_parse module=parser status=rejected field={}",
        err.field()
    );
    err
}
