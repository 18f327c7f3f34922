use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.remove_contact(name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact {} has been removed.",
            removed.name
        )))
        .changed())
}
