//! # Storage Layer
//!
//! The [`BookStore`] trait is the persistence seam for the address book.
//! Commands only ever see an [`AddressBook`]; where it came from is the
//! store's business.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file
//!   - writes go to a temp file in the same directory, then rename over the
//!     target, so an interrupted save leaves the previous file intact
//!   - a missing file loads as an empty book
//!
//! - [`memory::InMemoryStore`]: keeps the encoded snapshot in memory, for
//!   tests. It runs the same codec as `FileStore`.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "Alice", "phones": ["0501234567"], "birthday": "1990-05-03" },
//!     { "name": "Bob", "phones": ["111", "222"] }
//!   ]
//! }
//! ```
//!
//! Field values are validated on the way in: a phone with letters in it, a
//! bad date, or two contacts with the same name make the file corrupt.

use crate::book::AddressBook;
use crate::error::{RolodexError, Result};
use crate::model::ContactRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Load the stored book. A store that has never been written yields an
    /// empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Where the book lives, for messages.
    fn location(&self) -> String;
}

#[derive(Serialize, Deserialize)]
struct BookFile {
    contacts: Vec<ContactRecord>,
}

#[derive(Serialize)]
struct BookFileRef<'a> {
    contacts: &'a [ContactRecord],
}

pub(crate) fn encode(book: &AddressBook) -> Result<String> {
    let file = BookFileRef {
        contacts: book.records(),
    };
    serde_json::to_string_pretty(&file).map_err(RolodexError::Serialization)
}

pub(crate) fn decode(content: &str, path: &Path) -> Result<AddressBook> {
    let corrupt = |reason: String| RolodexError::CorruptStore {
        path: path.to_path_buf(),
        reason,
    };
    let file: BookFile = serde_json::from_str(content).map_err(|e| corrupt(e.to_string()))?;
    AddressBook::from_records(file.contacts).map_err(corrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn encode_decode_preserves_order_and_fields() {
        let mut book = AddressBook::new();
        book.add_contact("Zed", "1").unwrap();
        book.add_contact("Amy", "2").unwrap();
        book.get_mut("Amy").unwrap().add_phone("3").unwrap();
        book.get_mut("Zed")
            .unwrap()
            .set_birthday(Some("1980-10-10"))
            .unwrap();

        let text = encode(&book).unwrap();
        let back = decode(&text, Path::new("book.json")).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn non_ascii_names_roundtrip() {
        let mut book = AddressBook::new();
        for name in ["олена", "ÉMILE", "İlker", "straße"] {
            book.add_contact(name, "1").unwrap();
        }
        assert!(book.add_contact("Aİ", "1").is_err());

        let back = decode(&encode(&book).unwrap(), Path::new("book.json")).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn birthday_is_omitted_when_absent() {
        let mut book = AddressBook::new();
        book.add_contact("Amy", "2").unwrap();
        let text = encode(&book).unwrap();
        assert!(!text.contains("birthday"));
    }

    #[test]
    fn decode_reports_corrupt_content() {
        let path = PathBuf::from("book.json");
        for content in [
            "",
            "not json",
            "{\"contacts\": 3}",
            "{\"contacts\": [{\"name\": \"Amy\", \"phones\": [\"12x\"]}]}",
            "{\"contacts\": [{\"name\": \"Amy\", \"phones\": [\"1\"], \"birthday\": \"1990-02-31\"}]}",
            "{\"contacts\": [{\"name\": \"Amy\", \"phones\": [\"1\"]}, {\"name\": \"Amy\", \"phones\": [\"2\"]}]}",
            "{\"contacts\": [{\"name\": \"Amy\", \"phones\": [\"1\", \"1\"]}]}",
        ] {
            match decode(content, &path) {
                Err(RolodexError::CorruptStore { path: p, .. }) => assert_eq!(p, path),
                other => panic!("expected CorruptStore for {:?}, got {:?}", content, other),
            }
        }
    }

    #[test]
    fn decode_empty_book() {
        let book = decode("{\"contacts\": []}", Path::new("x")).unwrap();
        assert!(book.is_empty());
    }
}
