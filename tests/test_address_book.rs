//! Address book behaviour through the public command surface.

mod fixtures;
mod mocks;

use contact_book::error::BookError;
use contact_book::repositories::BookRepository;
use contact_book::{codec, ContactService, PhoneNumber, Record};
use fixtures::*;
use mocks::MockBookRepository;
use std::path::Path;
use std::sync::Arc;

fn new_service() -> ContactService {
    let repo = Arc::new(MockBookRepository::new()) as Arc<dyn BookRepository>;
    ContactService::new(repo, "book.json", true)
}

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

#[test]
fn test_bill_lifecycle() {
    let mut service = new_service();
    service.load(Path::new("does-not-exist.json")).unwrap();
    assert!(service.book().is_empty());

    service.add_contact("Bill", "1234567890").unwrap();

    let err = service.add_contact("Bill", "0000000000").unwrap_err();
    assert!(matches!(err, BookError::Conflict(_)));
    assert_eq!(service.find("bill").unwrap().list_phones(), vec!["1234567890"]);

    service.set_birthday("Bill", "1990-05-21").unwrap();

    let decoded = codec::decode(codec::encode(service.book())).unwrap();
    let bill = decoded.find("bill").unwrap();
    assert_eq!(bill.list_phones(), vec!["1234567890"]);
    assert_eq!(bill.birthday().map(|b| b.as_str()), Some("1990-05-21"));
}

#[test]
fn test_edit_missing_phone_is_not_found() {
    let mut service = new_service();
    service.add_contact("Bill", "1234567890").unwrap();

    let err = service
        .edit_phone("Bill", "9999999999", "1112223333")
        .unwrap_err();
    assert!(matches!(err, BookError::NotFound(_)));
    assert_eq!(service.find("bill").unwrap().list_phones(), vec!["1234567890"]);
}

#[test]
fn test_edit_phone_on_missing_contact_is_not_found() {
    let mut service = new_service();
    let err = service
        .edit_phone("Nobody", "1234567890", "1112223333")
        .unwrap_err();
    assert!(matches!(err, BookError::NotFound(_)));
}

#[test]
fn test_padded_name_is_the_same_contact() {
    let mut service = new_service();
    service.add_contact("Bill", "1234567890").unwrap();

    let err = service.add_contact(" Bill ", "0000000000").unwrap_err();
    assert!(matches!(err, BookError::Conflict(_)));
    assert_eq!(service.list_all().len(), 1);

    service.set_birthday("  bill", "1990-05-21").unwrap();
    assert!(service.find("BILL ").unwrap().birthday().is_some());

    let mut padded = new_service();
    padded.add_contact("  Mila  ", "5551234567").unwrap();
    assert_eq!(names(&padded.list_all()), vec!["Mila"]);
    assert_eq!(padded.find("mila").unwrap().key(), "mila");
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let mut service = new_service();
    service.add_contact("Mila", "1234567890").unwrap();
    service.add_contact("Bob", "5550001111").unwrap();

    assert_eq!(names(&service.search_by_name("mil")), vec!["Mila"]);
    assert_eq!(names(&service.search_by_name("MIL")), vec!["Mila"]);
    assert_eq!(names(&service.search_by_phone("456")), vec!["Mila"]);
    assert!(service.search_by_name("zed").is_empty());
    assert!(service.search_by_phone("999").is_empty());
}

#[test]
fn test_search_unicode_names() {
    let mut service = new_service();
    for record in sample_book().iter() {
        let first = record.phones()[0].as_str();
        service.add_contact(record.name().as_str(), first).unwrap();
    }
    assert_eq!(names(&service.search_by_name("зо")), vec!["ЗОЯ"]);
    assert!(service.find("зоя").is_some());
}

#[test]
fn test_list_all_keeps_insertion_order_after_delete() {
    let mut service = new_service();
    service.add_contact("Carol", "1111111111").unwrap();
    service.add_contact("alice", "2222222222").unwrap();
    service.add_contact("Bob", "3333333333").unwrap();
    service.delete_contact("ALICE").unwrap();
    service.add_contact("Alice", "4444444444").unwrap();

    assert_eq!(names(&service.list_all()), vec!["Carol", "Bob", "Alice"]);
}

#[test]
fn test_failed_birthday_update_keeps_existing() {
    let mut service = new_service();
    service.add_contact("Bill", "1234567890").unwrap();
    service.set_birthday("Bill", "1990-05-21").unwrap();

    assert!(service.set_birthday("bill", "21-05-1990").is_err());
    let bill = service.find("Bill").unwrap();
    assert_eq!(bill.birthday().map(|b| b.as_str()), Some("1990-05-21"));
}

#[test]
fn test_phone_validation_matches_ten_digit_rule() {
    let valid = ["1234567890", "0000000000", "9999999999"];
    let invalid = ["", "123456789", "12345678901", "123456789O", "(123)45678", "12345 7890"];

    for value in valid {
        assert!(PhoneNumber::new(value).is_ok(), "{value} should be valid");
    }
    for value in invalid {
        assert!(PhoneNumber::new(value).is_err(), "{value} should be invalid");
    }
}

#[test]
fn test_upcoming_birthdays_through_service() {
    let mut service = new_service();
    service.add_contact("Leap", "1234567890").unwrap();
    service.set_birthday("Leap", "2000-02-29").unwrap();
    service.add_contact("Later", "5551234567").unwrap();
    service.set_birthday("Later", "1990-04-01").unwrap();

    // 2023 has no Feb 29; the birthday is observed on Wednesday Mar 1
    let upcoming = service.upcoming_birthdays(date(2023, 2, 25), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].record.name().as_str(), "Leap");
    assert_eq!(upcoming[0].date, date(2023, 3, 1));
    assert_eq!(upcoming[0].days_until, 4);
    assert_eq!(upcoming[0].congratulate_on, date(2023, 3, 1));
}
