//! Deterministic sample contacts for tests and demos.
//!
//! # Responsibility
//! - Build persons with sensible defaults through `PersonBuilder`.
//! - Provide the fixed roster returned by `typical_persons`.
//!
//! # Invariants
//! - Fixtures are produced by functions; every call returns a fresh,
//!   independently owned value. There is no shared mutable fixture state.

mod person_builder;
mod typical_persons;

pub use person_builder::PersonBuilder;
pub use typical_persons::{
    alice, amy, benson, bob, carl, daniel, elle, fiona, george, hoon, ida, typical_address_book,
    typical_persons, KEYWORD_MATCHING_MEIER, VALID_EMAIL_AMY, VALID_EMAIL_BOB, VALID_NAME_AMY,
    VALID_NAME_BOB, VALID_PHONE_AMY, VALID_PHONE_BOB, VALID_TAG_FRIEND, VALID_TAG_HUSBAND,
};
