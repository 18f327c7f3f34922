//! The in-memory address book.
//!
//! Records are kept in a `Vec` in insertion order and looked up by a linear
//! scan over their (title-cased) names. Names are unique: every path that
//! inserts a record checks for an existing one first.

use crate::error::{RolodexError, Result};
use crate::field::{Field, Name, Phone};
use crate::model::ContactRecord;
use std::collections::HashSet;
use std::slice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from records read back from storage. Duplicate names or
    /// duplicate phones within one record are reported as a description of
    /// the first offending entry.
    pub fn from_records(records: Vec<ContactRecord>) -> std::result::Result<Self, String> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(format!("duplicate contact '{}'", record.name));
            }
            let mut phones = HashSet::new();
            if !record.phones().iter().all(|p| phones.insert(p.as_str())) {
                return Err(format!("duplicate phone in contact '{}'", record.name));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ContactRecord> {
        self.records.iter()
    }

    /// Consecutive chunks of at most `page_size` records.
    pub fn pages(&self, page_size: usize) -> slice::Chunks<'_, ContactRecord> {
        self.records.chunks(page_size.max(1))
    }

    /// Inserts a new contact, or replaces the phones of an existing one with
    /// `phone`. An existing birthday is kept.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<&ContactRecord> {
        let name = Name::parse(name)?;
        let phone = Phone::parse(phone)?;

        let idx = match self.position(&name) {
            Some(idx) => {
                self.records[idx].replace_phones(phone);
                idx
            }
            None => {
                self.records.push(ContactRecord::new(name, phone));
                self.records.len() - 1
            }
        };
        Ok(&self.records[idx])
    }

    /// Every record whose name or any phone contains `query`.
    pub fn find_contact(&self, query: &str) -> Vec<&ContactRecord> {
        self.records.iter().filter(|r| r.matches(query)).collect()
    }

    pub fn get(&self, name: &str) -> Result<&ContactRecord> {
        let idx = self.lookup(name)?;
        Ok(&self.records[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut ContactRecord> {
        let idx = self.lookup(name)?;
        Ok(&mut self.records[idx])
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<ContactRecord> {
        let idx = self.lookup(name)?;
        Ok(self.records.remove(idx))
    }

    fn lookup(&self, raw: &str) -> Result<usize> {
        // A name that cannot be valid cannot be in the book either.
        let name = Name::parse(raw).map_err(|_| RolodexError::NotFound(raw.to_string()))?;
        self.position(&name)
            .ok_or_else(|| RolodexError::NotFound(name.to_string()))
    }

    fn position(&self, name: &Name) -> Option<usize> {
        self.records.iter().position(|r| &r.name == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
