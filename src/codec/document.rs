//! Serde shapes of the persisted address book document.

use serde::{Deserialize, Serialize};

/// Top-level persisted document: `{ "contacts": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookDocument {
    /// Contacts in address book order
    pub contacts: Vec<ContactDocument>,
}

/// One persisted contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDocument {
    /// Name as entered
    pub name: String,

    /// Phones in insertion order; the first is the phone the record was
    /// created with
    pub phones: Vec<String>,

    /// `YYYY-MM-DD`, written as `null` when unset
    #[serde(default)]
    pub birthday: Option<String>,
}
