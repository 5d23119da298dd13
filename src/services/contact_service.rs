//! Contact service layer.
//!
//! The command surface front ends call: it owns one address book, knows
//! where it is persisted, and optionally saves after every successful
//! mutation.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::repositories::BookRepository;
use crate::store::{AddressBook, UpcomingBirthday};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Address book operations with persistence.
///
/// A failed operation never changes the address book. With autosave on, a
/// mutation is applied to a copy of the book and only takes effect once the
/// copy has been saved; if the save fails, the error is returned and the
/// book is left as it was.
pub struct ContactService {
    book: AddressBook,
    repository: Arc<dyn BookRepository>,
    location: PathBuf,
    autosave: bool,
}

impl ContactService {
    /// Create a service over an empty address book persisted at `location`.
    pub fn new(
        repository: Arc<dyn BookRepository>,
        location: impl Into<PathBuf>,
        autosave: bool,
    ) -> Self {
        Self {
            book: AddressBook::new(),
            repository,
            location: location.into(),
            autosave,
        }
    }

    /// Create a service and load whatever is stored at `location`.
    pub fn open(
        repository: Arc<dyn BookRepository>,
        location: impl Into<PathBuf>,
        autosave: bool,
    ) -> BookResult<Self> {
        let mut service = Self::new(repository, location, autosave);
        let location = service.location.clone();
        service.load(&location)?;
        Ok(service)
    }

    /// The address book being served.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Where the address book is persisted.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Replace the address book with the one stored at `path`, which becomes
    /// the persistence location. On error nothing changes.
    pub fn load(&mut self, path: &Path) -> BookResult<()> {
        let book = self.repository.load(path)?;
        self.book = book;
        self.location = path.to_path_buf();
        Ok(())
    }

    /// Like [`ContactService::load`], but an unreadable or malformed document
    /// leaves an empty address book at `path`. The problem is still returned.
    pub fn load_or_empty(&mut self, path: &Path) -> BookResult<()> {
        match self.load(path) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Could not load address book, starting empty"
                );
                self.book = AddressBook::new();
                self.location = path.to_path_buf();
                Err(err)
            }
        }
    }

    /// Write the address book to `path`, which becomes the persistence
    /// location.
    pub fn save(&mut self, path: &Path) -> BookResult<()> {
        self.repository.save(path, &self.book)?;
        self.location = path.to_path_buf();
        Ok(())
    }

    /// Apply `change` and, with autosave on, persist the result before it
    /// replaces the current book. `change` reports whether it modified
    /// anything; unchanged books are not saved.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut AddressBook) -> BookResult<(T, bool)>,
    ) -> BookResult<T> {
        if !self.autosave {
            return change(&mut self.book).map(|(value, _)| value);
        }

        let mut next = self.book.clone();
        let (value, changed) = change(&mut next)?;
        if changed {
            self.repository.save(&self.location, &next)?;
            self.book = next;
        }
        Ok(value)
    }

    fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
        book.find_mut(name).ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Exact lookup by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.book.find(name)
    }

    /// Add a contact with its first phone.
    ///
    /// # Errors
    ///
    /// `Validation` for a bad name or phone, `Conflict` if the name exists.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<()> {
        let record = Record::new(name, phone)?;
        self.commit(|book| book.add(record).map(|()| ((), true)))?;
        tracing::info!(name = %name, "Contact added");
        Ok(())
    }

    /// Delete a contact, returning it.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<Record> {
        let removed = self.commit(|book| book.delete(name).map(|record| (record, true)))?;
        tracing::info!(name = %name, "Contact deleted");
        Ok(removed)
    }

    /// Add a phone to an existing contact. Returns `false` if it was already
    /// present.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> BookResult<bool> {
        let added = self.commit(|book| {
            let added = Self::record_mut(book, name)?.add_phone(phone)?;
            Ok((added, added))
        })?;
        if added {
            tracing::info!(name = %name, "Phone added");
        }
        Ok(added)
    }

    /// Remove a phone from an existing contact. Returns `false` if the
    /// contact did not have it.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<bool> {
        let removed = self.commit(|book| {
            let removed = Self::record_mut(book, name)?.remove_phone(phone);
            Ok((removed, removed))
        })?;
        if removed {
            tracing::info!(name = %name, "Phone removed");
        }
        Ok(removed)
    }

    /// Replace one of a contact's phones, keeping its position.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.commit(|book| {
            Self::record_mut(book, name)?.edit_phone(old, new)?;
            Ok(((), true))
        })?;
        tracing::info!(name = %name, "Phone edited");
        Ok(())
    }

    /// Set or replace a contact's birthday.
    pub fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<()> {
        self.commit(|book| {
            Self::record_mut(book, name)?.set_birthday(date)?;
            Ok(((), true))
        })?;
        tracing::info!(name = %name, birthday = %date, "Birthday set");
        Ok(())
    }

    /// Remove a contact's birthday. Returns `false` if none was set.
    pub fn clear_birthday(&mut self, name: &str) -> BookResult<bool> {
        let cleared = self.commit(|book| {
            let record = Self::record_mut(book, name)?;
            let had_birthday = record.birthday().is_some();
            record.clear_birthday();
            Ok((had_birthday, had_birthday))
        })?;
        if cleared {
            tracing::info!(name = %name, "Birthday cleared");
        }
        Ok(cleared)
    }

    /// Contacts whose name contains `query`, ignoring case.
    pub fn search_by_name(&self, query: &str) -> Vec<&Record> {
        let results = self.book.search_by_name(query);
        tracing::debug!(
            query = %query,
            result_count = results.len(),
            "Name search completed"
        );
        results
    }

    /// Contacts with a phone containing `query`.
    pub fn search_by_phone(&self, query: &str) -> Vec<&Record> {
        let results = self.book.search_by_phone(query);
        tracing::debug!(
            query = %query,
            result_count = results.len(),
            "Phone search completed"
        );
        results
    }

    /// Every contact in insertion order.
    pub fn list_all(&self) -> Vec<&Record> {
        self.book.iter().collect()
    }

    /// Contacts with a birthday in the next `within_days` days.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        within_days: i64,
    ) -> Vec<UpcomingBirthday<'_>> {
        self.book.upcoming_birthdays(today, within_days)
    }
}
