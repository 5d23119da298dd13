//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact: names, phone numbers and
//! birthdays. Each value object validates at construction time, so invalid
//! data cannot be represented in an address book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::{normalize, Name};
pub use phone::PhoneNumber;
