use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Literal, case-sensitive substring search over names and phones.
pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let found: Vec<_> = book.find_contact(query).into_iter().cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing found.")));
    }
    Ok(CmdResult::default().with_listed_contacts(found))
}
