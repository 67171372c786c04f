//! Phonebook records served from a linear container.
//!
//! The demonstration consumer for the containers: fixed-format
//! `last first number` records are loaded from a line-oriented text file
//! into a [`DoublyLinkedList`] and queried by name or by number. All it
//! asks of its backing store is an append, a count, and a forward scan.

use crate::collections::DoublyLinkedList;
use anyhow::{Context, Result};
use core::fmt;
use std::path::Path;

/// A person's name, split into given and family parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    first: String,
    last: String,
}

impl Name {
    /// Creates a name from its given and family parts.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// The given name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The family name.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Formal rendering: given name, space, family name.
    pub fn formal(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// A phone number kept in its textual `nnn-nnn-nnnn` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Wraps a textual phone number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// The number as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One phonebook record: a name and its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookEntry {
    name: Name,
    number: PhoneNumber,
}

impl PhonebookEntry {
    /// Creates an entry from a name and number.
    pub fn new(name: Name, number: PhoneNumber) -> Self {
        Self { name, number }
    }

    /// The entry's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The entry's phone number.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.number
    }
}

impl fmt::Display for PhonebookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s phone number is {}", self.name.formal(), self.number)
    }
}

/// An in-memory lookup table of phonebook entries.
///
/// Entries keep their file order; queries are linear scans over the backing
/// list's forward iteration.
#[derive(Debug, Default)]
pub struct Phonebook {
    entries: DoublyLinkedList<PhonebookEntry>,
}

impl Phonebook {
    /// Parses phonebook text: whitespace-separated records of
    /// `last first number`, three tokens per record.
    ///
    /// # Errors
    ///
    /// Fails on a truncated final record (one or two trailing tokens).
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = DoublyLinkedList::new();
        let mut tokens = text.split_whitespace();
        while let Some(last) = tokens.next() {
            let first = tokens
                .next()
                .with_context(|| format!("record for '{last}' is missing the first name"))?;
            let number = tokens
                .next()
                .with_context(|| format!("record for '{first} {last}' is missing the number"))?;
            entries.push_back(PhonebookEntry::new(
                Name::new(first, last),
                PhoneNumber::new(number),
            ));
        }
        Ok(Self { entries })
    }

    /// Reads and parses a phonebook file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or a record is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading phonebook file {}", path.display()))?;
        Self::parse(&text)
    }

    /// Number of entries loaded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries whose name matches `first` and `last` exactly.
    pub fn lookup<'a>(
        &'a self,
        first: &'a str,
        last: &'a str,
    ) -> impl Iterator<Item = &'a PhonebookEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.name.first == first && entry.name.last == last)
    }

    /// All entries whose number matches `number` exactly.
    pub fn reverse_lookup<'a>(&'a self, number: &'a str) -> impl Iterator<Item = &'a PhonebookEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.number.as_str() == number)
    }
}
