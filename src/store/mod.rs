//! In-memory contact storage.

pub mod address_book;

pub use address_book::{AddressBook, UpcomingBirthday};
