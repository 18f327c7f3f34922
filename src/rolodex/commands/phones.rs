use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.get(name)?;
    let mut result = CmdResult::default().with_listed_contacts(vec![record.clone()]);
    if record.phones().is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no phone numbers.", record.name)));
    }
    Ok(result)
}

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    if record.has_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} already has phone number {}.",
            record.name, phone
        ))));
    }
    record.add_phone(phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone number {} added to {}.",
            phone, record.name
        )))
        .changed())
}

/// Removing a number the contact does not have is reported, not an error.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    if !record.has_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} has no phone number {}.",
            record.name, phone
        ))));
    }
    record.remove_phone(phone);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone number {} removed from {}.",
            phone, record.name
        )))
        .changed())
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    let had_old = record.has_phone(old);
    let had_new = record.has_phone(new);
    if had_new && (!had_old || old == new) {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "{} already has phone number {}; nothing changed.",
            record.name, new
        ))));
    }
    record.edit_phone(old, new)?;

    let mut result = CmdResult::default().changed();
    if !had_old {
        result.add_message(CmdMessage::warning(format!(
            "{} had no phone number {}; {} was added.",
            record.name, old, new
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Phone number for {} changed from {} to {}.",
            record.name, old, new
        )));
    }
    Ok(result)
}
