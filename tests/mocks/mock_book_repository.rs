use contact_book::codec;
use contact_book::error::{BookError, BookResult};
use contact_book::repositories::BookRepository;
use contact_book::store::AddressBook;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps encoded documents in memory, keyed by location, and tracks method
/// calls for verification. Saves can be made to fail on demand.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    documents: Arc<Mutex<HashMap<PathBuf, String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw document text at a location.
    pub fn put_document(&self, location: impl Into<PathBuf>, text: &str) {
        let mut documents = self.documents.lock().unwrap();
        documents.insert(location.into(), text.to_string());
    }

    /// Raw document text stored at a location.
    pub fn document(&self, location: &Path) -> Option<String> {
        let documents = self.documents.lock().unwrap();
        documents.get(location).cloned()
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self, location: &Path) -> BookResult<AddressBook> {
        self.track_call("load");

        match self.document(location) {
            Some(text) => codec::from_json(&text),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, location: &Path, book: &AddressBook) -> BookResult<()> {
        self.track_call("save");

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(BookError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock save failure",
            )));
        }

        let text = codec::to_json(book)?;
        self.put_document(location, &text);
        Ok(())
    }
}
