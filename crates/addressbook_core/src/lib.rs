//! Core domain logic for the address book.
//! This crate is the single source of truth for contact field invariants.

pub mod logging;
pub mod model;
pub mod parser;
pub mod testutil;
pub mod util;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::address_book::{AddressBook, AddressBookError};
pub use model::contact::{Email, Name, Phone};
pub use model::event::EventName;
pub use model::index::Index;
pub use model::person::Person;
pub use model::tag::Tag;
pub use parser::{
    parse_date, parse_duration, parse_email, parse_event, parse_index, parse_name, parse_phone,
    parse_tag, parse_tags, parse_time, ParseError,
};

/// Minimal health-check API for integration probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
