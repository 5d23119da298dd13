//! Test fixtures and sample data.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Build a fixed calendar date.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a record with phones and an optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let (first, rest) = phones.split_first().expect("at least one phone");
    let mut record = Record::new(name, first).unwrap();
    for phone in rest {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).unwrap();
    }
    record
}

/// A small address book covering multiple phones, birthdays and casing.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add(sample_record("Bill", &["1234567890", "5551234567"], Some("1990-05-21")))
        .unwrap();
    book.add(sample_record("Mila", &["5559876543"], None)).unwrap();
    book.add(sample_record("O'Neil Jr.", &["0001112222"], Some("2000-02-29")))
        .unwrap();
    book.add(sample_record(
        "ЗОЯ",
        &["7778889999", "1112223333", "4445556666"],
        Some("1985-12-31"),
    ))
    .unwrap();
    book
}
