//! The address book: records keyed by case-folded name.

use crate::calendar;
use crate::domain::normalize;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;

/// A contact whose birthday falls inside an upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    /// The contact
    pub record: &'a Record,

    /// Date the birthday is observed on (Mar 1 for Feb 29 in non-leap years)
    pub date: NaiveDate,

    /// Date to send congratulations on (weekends move to Monday)
    pub congratulate_on: NaiveDate,

    /// Days from today until `date`
    pub days_until: i64,
}

/// Insertion-ordered collection of records, indexed by case-folded name.
///
/// Callers must check [`AddressBook::contains`] or use [`AddressBook::add`]
/// to avoid replacing an existing contact; [`AddressBook::insert`] overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the address book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a contact with this name (in any casing) exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize(name))
    }

    /// Add a new contact.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Conflict` if a contact with the same case-folded
    /// name already exists. The existing contact is left untouched.
    pub fn add(&mut self, record: Record) -> BookResult<()> {
        let key = record.key();
        if self.index.contains_key(&key) {
            return Err(BookError::Conflict(record.name().to_string()));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Insert a contact, replacing any existing one with the same key in
    /// place. Returns the replaced record.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        let key = record.key();
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.records[position], record));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        None
    }

    /// Exact lookup by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index
            .get(&normalize(name))
            .map(|&position| &self.records[position])
    }

    /// Mutable exact lookup by name, ignoring case.
    ///
    /// Record mutators never change the name, so the key stays valid.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(&normalize(name)) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    /// Remove a contact, returning it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no contact has this name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let position = self
            .index
            .remove(&normalize(name))
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        let removed = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Contacts whose name contains `query`, ignoring case, in insertion order.
    pub fn search_by_name(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name().as_str().to_lowercase().contains(&needle))
            .collect()
    }

    /// Contacts with at least one phone containing `query`, ignoring case,
    /// in insertion order.
    pub fn search_by_phone(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.phones()
                    .iter()
                    .any(|p| p.as_str().to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// A fresh pass over all contacts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Contacts whose next birthday is at most `within_days` days after
    /// `today`, soonest first. Ties keep insertion order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        within_days: i64,
    ) -> Vec<UpcomingBirthday<'_>> {
        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = calendar::next_occurrence(birthday.date(), today)?;
                let days_until = (date - today).num_days();
                (days_until <= within_days).then(|| UpcomingBirthday {
                    record,
                    date,
                    congratulate_on: calendar::congratulation_date(date),
                    days_until,
                })
            })
            .collect();
        upcoming.sort_by_key(|u| u.days_until);
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
