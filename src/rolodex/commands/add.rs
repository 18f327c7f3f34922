use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.add_contact(name, phone)?;
    let message = format!(
        "Contact {} with phone number {} has been added.",
        record.name, phone
    );
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .changed())
}

/// Same effect as [`run`]; only the wording differs.
pub fn change(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.add_contact(name, phone)?;
    let message = format!("Phone number for {} has been updated to {}.", record.name, phone);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .changed())
}
