use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// Replaces `book` with the stored one. On error `book` is left as it was.
pub fn load<S: BookStore>(store: &S, book: &mut AddressBook) -> Result<CmdResult> {
    *book = store.load()?;
    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Address book loaded from {} ({} contacts).",
        store.location(),
        book.len()
    ))))
}

pub fn save<S: BookStore>(store: &mut S, book: &AddressBook) -> Result<CmdResult> {
    store.save(book)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Address book saved to {}.",
        store.location()
    ))))
}
