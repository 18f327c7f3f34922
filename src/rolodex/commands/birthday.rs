use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

pub fn set(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = book.get_mut(name)?;
    record.set_birthday(Some(birthday))?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Birthday for {} set to {}.",
            record.name, birthday
        )))
        .changed())
}

pub fn days(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book.get(name)?;
    let message = match record.days_to_birthday_from(today) {
        None => CmdMessage::info(format!("{} has no birthday set.", record.name)),
        Some(0) => CmdMessage::success(format!("Today is {}'s birthday!", record.name)),
        Some(1) => CmdMessage::info(format!("1 day until {}'s birthday.", record.name)),
        Some(n) => CmdMessage::info(format!("{} days until {}'s birthday.", n, record.name)),
    };
    Ok(CmdResult::default().with_message(message))
}
