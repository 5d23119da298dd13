//! Contact Book - a file-backed personal address book.
//!
//! Contacts carry validated phone numbers and an optional birthday. The
//! whole collection is persisted as one JSON document.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record
//! - **store**: The keyed, insertion-ordered address book
//! - **calendar**: Days-until-birthday arithmetic
//! - **codec**: Address book to and from its JSON document
//! - **repositories**: Where documents are read and written
//! - **services**: The command surface front ends call
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod calendar;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod store;

pub use codec::{BookDocument, ContactDocument};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use repositories::{BookRepository, JsonFileRepository};
pub use services::ContactService;
pub use store::{AddressBook, UpcomingBirthday};
