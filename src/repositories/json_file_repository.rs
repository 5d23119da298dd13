use crate::codec;
use crate::error::BookResult;
use crate::repositories::traits::BookRepository;
use crate::store::AddressBook;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Address book repository backed by a JSON document on disk.
///
/// Saves write a sibling `.tmp` file and rename it over the target, so a
/// crash mid-write never leaves a truncated document behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileRepository;

impl JsonFileRepository {
    /// Create a new JsonFileRepository.
    pub fn new() -> Self {
        Self
    }

    fn temp_path(location: &Path) -> PathBuf {
        let mut name = location
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("address_book"));
        name.push(".tmp");
        location.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self, location: &Path) -> BookResult<AddressBook> {
        let text = match fs::read_to_string(location) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %location.display(),
                    "Address book file does not exist, starting empty"
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };
        let book = codec::from_json(&text)?;
        tracing::info!(
            path = %location.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, location: &Path, book: &AddressBook) -> BookResult<()> {
        let json = codec::to_json(book)?;

        if let Some(parent) = location.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = Self::temp_path(location);
        fs::write(&temp, json)?;
        fs::rename(&temp, location)?;

        tracing::info!(
            path = %location.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
