use crate::error::BookResult;
use crate::store::AddressBook;
use std::path::Path;

/// Repository for persisting address books.
///
/// Provides abstraction over where documents live, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository: Send + Sync {
    /// Load the address book stored at `location`.
    ///
    /// A location that holds nothing yet yields an empty address book.
    fn load(&self, location: &Path) -> BookResult<AddressBook>;

    /// Replace whatever is stored at `location` with `book`.
    fn save(&self, location: &Path, book: &AddressBook) -> BookResult<()>;
}
