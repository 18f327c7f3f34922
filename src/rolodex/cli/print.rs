use colored::*;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::error::RolodexError;
use rolodex::field::Phone;
use rolodex::model::ContactRecord;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const HELP: &str = "\
Available commands:
  hello                              reload the address book and say hi
  add <name> <phone>                 add a contact, or replace its phones
  change <name> <phone>              same as add
  phone <name>                       show a contact
  add-phone <name> <phone>           add another phone to a contact
  remove-phone <name> <phone>        remove one of a contact's phones
  edit-phone <name> <old> <new>      replace one phone with another
  birthday <name> <YYYY-MM-DD>       set a contact's birthday
  days <name>                        days until a contact's birthday
  remove <name>                      delete a contact
  find <query>                       search names and phones
  show all                           list every contact
  show page <n>                      list one page of contacts
  save / load                        write or re-read the address book
  good bye / close / exit            save and quit";

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: &RolodexError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())?;
    if matches!(error, RolodexError::UnknownCommand(_)) {
        writeln!(out, "{}", HELP)?;
    }
    Ok(())
}

pub fn print_contacts<W: Write>(out: &mut W, contacts: &[ContactRecord]) -> io::Result<()> {
    if contacts.is_empty() {
        return Ok(());
    }

    let name_width = contacts
        .iter()
        .map(|c| c.name.as_str().width())
        .max()
        .unwrap_or(0);

    for contact in contacts {
        let name = contact.name.as_str();
        let padding = " ".repeat(name_width - name.width());
        let phones = contact
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(out, "{}{}  {}", name.bold(), padding, phones)?;
        if let Some(birthday) = &contact.birthday {
            write!(out, "  {}", format!("(birthday {})", birthday).dimmed())?;
        }
        writeln!(out)?;
    }
    Ok(())
}
