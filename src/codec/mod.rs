//! Persistence codec: address book to and from its JSON document.
//!
//! Decoding is strict. Any contact that would not pass field validation
//! rejects the whole document with `BookError::Format`, and nothing is
//! partially loaded.

pub mod document;

pub use document::{BookDocument, ContactDocument};

use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::store::AddressBook;
use serde::Serialize;

/// Convert an address book into its document form.
pub fn encode(book: &AddressBook) -> BookDocument {
    BookDocument {
        contacts: book.iter().map(encode_record).collect(),
    }
}

fn encode_record(record: &Record) -> ContactDocument {
    ContactDocument {
        name: record.name().as_str().to_string(),
        phones: record.list_phones(),
        birthday: record.birthday().map(|b| b.as_str().to_string()),
    }
}

/// Rebuild an address book from its document form.
///
/// # Errors
///
/// Returns `BookError::Format` if a contact has no phones, any field fails
/// validation, or two contacts share a case-folded name.
pub fn decode(document: BookDocument) -> BookResult<AddressBook> {
    let mut book = AddressBook::new();
    for (position, contact) in document.contacts.into_iter().enumerate() {
        let record = decode_record(contact)
            .map_err(|reason| BookError::Format(format!("contact #{}: {}", position, reason)))?;
        if book.contains(record.name().as_str()) {
            return Err(BookError::Format(format!(
                "contact #{}: duplicate name {}",
                position,
                record.name()
            )));
        }
        book.insert(record);
    }
    Ok(book)
}

fn decode_record(contact: ContactDocument) -> Result<Record, String> {
    let (first, rest) = contact
        .phones
        .split_first()
        .ok_or_else(|| format!("{} has no phones", contact.name))?;

    let mut record = Record::new(&contact.name, first).map_err(|e| e.to_string())?;
    for phone in rest {
        record.add_phone(phone).map_err(|e| e.to_string())?;
    }
    if let Some(birthday) = contact.birthday.as_deref() {
        record.set_birthday(birthday).map_err(|e| e.to_string())?;
    }
    Ok(record)
}

/// Encode an address book as pretty-printed JSON with four-space indentation.
pub fn to_json(book: &AddressBook) -> BookResult<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    encode(book).serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| BookError::Format(e.to_string()))
}

/// Decode an address book from JSON text.
///
/// # Errors
///
/// Returns `BookError::Format` for malformed JSON, missing `contacts`,
/// `name` or `phones` keys, and anything [`decode`] rejects.
pub fn from_json(text: &str) -> BookResult<AddressBook> {
    let document: BookDocument = serde_json::from_str(text)?;
    decode(document)
}
