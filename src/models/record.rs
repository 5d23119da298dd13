//! Record model representing one person in the address book.

use crate::calendar;
use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;

/// A contact: a name, one or more phone numbers and an optional birthday.
///
/// Phones keep the order they were added in; the first one is the phone the
/// record was created with. Duplicate phone values are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with its first phone.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is empty or the phone is not
    /// ten digits.
    pub fn new(name: &str, phone: &str) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let phone = PhoneNumber::new(phone)?;
        Ok(Self {
            name,
            phones: vec![phone],
            birthday: None,
        })
    }

    /// The contact's name as entered.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The case-folded key this record is stored under.
    pub fn key(&self) -> String {
        self.name.key()
    }

    /// Read-only view of the phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The phone values in insertion order.
    pub fn list_phones(&self) -> Vec<String> {
        self.phones.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }

    /// Whether this record holds exactly `phone`.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.position_of(phone).is_some()
    }

    /// Validate and append a phone.
    ///
    /// Returns `Ok(false)` without changing anything when the phone is
    /// already present.
    pub fn add_phone(&mut self, phone: &str) -> Result<bool, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        if self.has_phone(phone.as_str()) {
            return Ok(false);
        }
        self.phones.push(phone);
        Ok(true)
    }

    /// Remove the phone with this exact value. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position_of(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// If `new` is already stored elsewhere, the `old` slot is dropped instead
    /// so phones stay unique.
    ///
    /// # Errors
    ///
    /// `NotFound` if `old` is not one of this record's phones, `Validation` if
    /// `new` is malformed. The phone list is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old).ok_or_else(|| {
            BookError::NotFound(format!("phone {} for {}", old, self.name))
        })?;
        let replacement = PhoneNumber::new(new)?;

        match self.position_of(replacement.as_str()) {
            Some(existing) if existing != index => {
                self.phones.remove(index);
            }
            _ => self.phones[index] = replacement,
        }
        Ok(())
    }

    /// Phones containing `fragment`.
    pub fn find_phone(&self, fragment: &str) -> Vec<&PhoneNumber> {
        self.phones.iter().filter(|p| p.contains(fragment)).collect()
    }

    /// Validate and replace the birthday. On error the previous birthday,
    /// or its absence, is kept.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Remove the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from `today` until this contact's next birthday, or `None` when
    /// no birthday is set.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .and_then(|b| calendar::days_until_next(b.date(), today))
    }
}
