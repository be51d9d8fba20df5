//! Domain model for contacts and their scheduling fields.
//!
//! # Responsibility
//! - Define validated value objects (`Name`, `Phone`, `Email`, `Tag`,
//!   `EventName`, `Index`).
//! - Define the `Person` aggregate and the `AddressBook` container.
//!
//! # Invariants
//! - A value object can only be built through its validating constructor;
//!   no invalid instance exists, including through deserialization.
//! - Value objects are immutable and compared structurally.

/// Implements the string plumbing shared by validated string wrappers:
/// `as_str`, `Display`, `AsRef<str>`, `TryFrom<String>`/`TryFrom<&str>` via
/// `try_new`, and `From<Self> for String` (used by serde `into`).
macro_rules! string_value_object {
    ($ty:ident) => {
        impl $ty {
            /// Returns the validated value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::parser::ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::parser::ParseError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

pub mod address_book;
pub mod contact;
pub mod event;
pub mod index;
pub mod person;
pub mod tag;
