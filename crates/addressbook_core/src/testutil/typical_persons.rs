use crate::model::address_book::AddressBook;
use crate::model::person::Person;
use crate::testutil::PersonBuilder;

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_AMY: &str = "11111111";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_AMY: &str = "amy@example.com";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_TAG_HUSBAND: &str = "husband";
pub const VALID_TAG_FRIEND: &str = "friend";

/// Matches BENSON and DANIEL in the typical roster.
pub const KEYWORD_MATCHING_MEIER: &str = "Meier";

pub fn alice() -> Person {
    PersonBuilder::new()
        .with_name("Alice Pauline")
        .with_email("alice@example.com")
        .with_phone("94351253")
        .with_parent_phone("85355255")
        .with_tags(["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .with_name("Benson Meier")
        .with_email("johnd@example.com")
        .with_phone("98765432")
        .with_parent_phone("94351253")
        .with_tags(["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_parent_phone("94351253")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .with_name("Daniel Meier")
        .with_phone("87652533")
        .with_email("cornelia@example.com")
        .with_parent_phone("94351253")
        .with_tags(["friends"])
        .build()
}

pub fn elle() -> Person {
    PersonBuilder::new()
        .with_name("Elle Meyer")
        .with_phone("94822240")
        .with_email("werner@example.com")
        .with_parent_phone("94351253")
        .build()
}

pub fn fiona() -> Person {
    PersonBuilder::new()
        .with_name("Fiona Kunz")
        .with_phone("94824270")
        .with_email("lydia@example.com")
        .with_parent_phone("94351253")
        .build()
}

pub fn george() -> Person {
    PersonBuilder::new()
        .with_name("George Best")
        .with_phone("94824420")
        .with_email("anna@example.com")
        .with_parent_phone("94351253")
        .build()
}

// Not part of the typical roster; used to test insertion.
pub fn hoon() -> Person {
    PersonBuilder::new()
        .with_name("Hoon Meier")
        .with_phone("84824240")
        .with_email("stefan@example.com")
        .with_parent_phone("94351253")
        .build()
}

pub fn ida() -> Person {
    PersonBuilder::new()
        .with_name("Ida Mueller")
        .with_phone("84821310")
        .with_email("hans@example.com")
        .with_parent_phone("94351253")
        .build()
}

// Built from the shared VALID_* constants.
pub fn amy() -> Person {
    PersonBuilder::new()
        .with_name(VALID_NAME_AMY)
        .with_phone(VALID_PHONE_AMY)
        .with_parent_phone(VALID_PHONE_BOB)
        .with_email(VALID_EMAIL_AMY)
        .with_tags([VALID_TAG_FRIEND])
        .build()
}

pub fn bob() -> Person {
    PersonBuilder::new()
        .with_name(VALID_NAME_BOB)
        .with_phone(VALID_PHONE_BOB)
        .with_parent_phone(VALID_PHONE_BOB)
        .with_email(VALID_EMAIL_BOB)
        .with_tags([VALID_TAG_HUSBAND, VALID_TAG_FRIEND])
        .build()
}

/// Returns the seven typical persons in fixed order.
pub fn typical_persons() -> Vec<Person> {
    vec![
        alice(),
        benson(),
        carl(),
        daniel(),
        elle(),
        fiona(),
        george(),
    ]
}

/// Returns a fresh address book holding every typical person.
pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        if let Err(err) = book.add_person(person) {
            panic!("typical roster must not contain duplicates: {err}");
        }
    }
    book
}
