use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::Result;
use std::path::Path;

const LOCATION: &str = "<memory>";

/// Keeps the encoded book in memory. `None` until the first save.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose next load sees `content` as the stored file.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            snapshot: Some(content.into()),
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.snapshot {
            Some(content) => decode(content, Path::new(LOCATION)),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(encode(book)?);
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}

// --- Test Fixtures ---
