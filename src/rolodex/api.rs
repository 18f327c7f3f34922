//! # API Facade
//!
//! [`RolodexApi`] owns the session state: the address book and the store it
//! persists to. It is the single entry point for every operation, whatever
//! the UI; the REPL in `cli/` is one client of it.
//!
//! The facade dispatches to `commands/*` and records whether the in-memory
//! book has drifted from the store (`is_dirty`). It does no formatting and
//! no I/O of its own beyond what the store does.
//!
//! `RolodexApi<S: BookStore>` is generic over storage:
//! - Production: `RolodexApi<FileStore>`
//! - Testing: `RolodexApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::{RolodexError, Result};
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

pub struct RolodexApi<S: BookStore> {
    store: S,
    book: AddressBook,
    page_size: usize,
    dirty: bool,
    /// The last load found the store unreadable and nothing has been saved
    /// since.
    load_failed: bool,
}

impl<S: BookStore> RolodexApi<S> {
    /// Starts with an empty book; call [`load`](Self::load) to read the store.
    pub fn new(store: S, page_size: usize) -> Self {
        Self {
            store,
            book: AddressBook::new(),
            page_size: page_size.max(1),
            dirty: false,
            load_failed: false,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The in-memory book has changes that were not saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn track(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        if let Ok(r) = &result {
            if r.changed {
                self.dirty = true;
            }
        }
        result
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!(name, phone, "add contact");
        let result = commands::add::run(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn change_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!(name, phone, "change contact");
        let result = commands::add::change(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<CmdResult> {
        debug!(name, "remove contact");
        let result = commands::remove::run(&mut self.book, name);
        self.track(result)
    }

    pub fn show_phones(&self, name: &str) -> Result<CmdResult> {
        commands::phones::show(&self.book, name)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!(name, phone, "add phone");
        let result = commands::phones::add(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        debug!(name, phone, "remove phone");
        let result = commands::phones::remove(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        debug!(name, old, new, "edit phone");
        let result = commands::phones::edit(&mut self.book, name, old, new);
        self.track(result)
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        debug!(name, birthday, "set birthday");
        let result = commands::birthday::set(&mut self.book, name, birthday);
        self.track(result)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<CmdResult> {
        self.days_to_birthday_on(name, Local::now().date_naive())
    }

    pub fn days_to_birthday_on(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::days(&self.book, name, today)
    }

    pub fn find(&self, query: &str) -> Result<CmdResult> {
        debug!(query, "find");
        commands::find::run(&self.book, query)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::show::all(&self.book)
    }

    pub fn show_page(&self, page: usize) -> Result<CmdResult> {
        commands::show::page(&self.book, self.page_size, page)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        match commands::session::load(&self.store, &mut self.book) {
            Ok(result) => {
                self.dirty = false;
                self.load_failed = false;
                Ok(result)
            }
            Err(e) => {
                if let RolodexError::CorruptStore { .. } = e {
                    self.load_failed = true;
                }
                Err(e)
            }
        }
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let result = commands::session::save(&mut self.store, &self.book)?;
        self.dirty = false;
        self.load_failed = false;
        Ok(result)
    }

    /// Saves at the end of a session, unless the store could not be read and
    /// the book was not touched since: then the stored data is left in place.
    pub fn close(&mut self) -> Result<CmdResult> {
        if self.load_failed && !self.dirty {
            let location = self.store.location();
            warn!(%location, "store unreadable and book unchanged, skipping save");
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "Address book at {} could not be read and was left unchanged.",
                location
            ))));
        }
        self.save()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> RolodexApi<InMemoryStore> {
        RolodexApi::new(InMemoryStore::new(), 10)
    }

    #[test]
    fn mutations_mark_dirty_and_save_clears() {
        let mut api = api();
        assert!(!api.is_dirty());

        api.add_contact("Alice", "1").unwrap();
        assert!(api.is_dirty());

        api.save().unwrap();
        assert!(!api.is_dirty());
        assert!(api.store().snapshot().unwrap().contains("Alice"));
    }

    #[test]
    fn failed_mutation_does_not_mark_dirty() {
        let mut api = api();
        assert!(api.add_contact("Alice", "x").is_err());
        assert!(!api.is_dirty());
    }

    #[test]
    fn queries_do_not_mark_dirty() {
        let mut api = api();
        api.add_contact("Alice", "1").unwrap();
        api.save().unwrap();

        api.find("A").unwrap();
        api.show_all().unwrap();
        api.show_page(1).unwrap();
        api.show_phones("Alice").unwrap();
        api.days_to_birthday("Alice").unwrap();
        assert!(!api.is_dirty());
    }

    #[test]
    fn load_discards_unsaved_changes() {
        let fixture = StoreFixture::new().with_contact("Alice", "1");
        let mut api = RolodexApi::new(fixture.store, 10);
        api.load().unwrap();
        api.add_contact("Bob", "2").unwrap();

        api.load().unwrap();
        assert!(!api.is_dirty());
        assert_eq!(api.book().len(), 1);
    }

    #[test]
    fn dispatches_phone_and_birthday_commands() {
        let mut api = api();
        api.add_contact("Alice", "1").unwrap();
        api.add_phone("Alice", "2").unwrap();
        api.edit_phone("Alice", "1", "3").unwrap();
        api.remove_phone("Alice", "2").unwrap();
        api.set_birthday("Alice", "1990-05-03").unwrap();

        let record = api.book().get("Alice").unwrap();
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "3");

        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let result = api.days_to_birthday_on("Alice", today).unwrap();
        assert_eq!(result.messages[0].content, "2 days until Alice's birthday.");

        api.remove_contact("Alice").unwrap();
        assert!(matches!(
            api.show_phones("Alice"),
            Err(RolodexError::NotFound(_))
        ));
    }

    #[test]
    fn close_leaves_unreadable_store_alone() {
        let mut api = RolodexApi::new(InMemoryStore::with_content("{oops"), 10);
        assert!(api.load().is_err());

        let result = api.close().unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(api.store().snapshot(), Some("{oops"));
    }

    #[test]
    fn close_saves_once_the_book_changes_after_a_failed_load() {
        let mut api = RolodexApi::new(InMemoryStore::with_content("{oops"), 10);
        assert!(api.load().is_err());
        api.add_contact("Alice", "1").unwrap();

        api.close().unwrap();
        assert!(api.store().snapshot().unwrap().contains("Alice"));
    }

    #[test]
    fn explicit_save_after_a_failed_load_clears_the_guard() {
        let mut api = RolodexApi::new(InMemoryStore::with_content("{oops"), 10);
        assert!(api.load().is_err());
        api.save().unwrap();
        api.close().unwrap();
        assert!(api.store().snapshot().unwrap().contains("contacts"));
    }

    #[test]
    fn page_size_is_at_least_one() {
        let mut api = RolodexApi::new(InMemoryStore::new(), 0);
        api.add_contact("Alice", "1").unwrap();
        api.add_contact("Bob", "2").unwrap();
        let result = api.show_page(2).unwrap();
        assert_eq!(result.listed_contacts[0].name.as_str(), "Bob");
    }
}
