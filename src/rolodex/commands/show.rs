use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

const EMPTY_BOOK: &str = "The contact list is empty.";

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK)));
    }
    Ok(CmdResult::default().with_listed_contacts(book.records().to_vec()))
}

/// One page of the book, `page` counting from 1.
pub fn page(book: &AddressBook, page_size: usize, page: usize) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK)));
    }

    let total = book.pages(page_size).count();
    let chunk = page
        .checked_sub(1)
        .and_then(|idx| book.pages(page_size).nth(idx));

    match chunk {
        Some(records) => Ok(CmdResult::default()
            .with_listed_contacts(records.to_vec())
            .with_message(CmdMessage::info(format!("Page {} of {}", page, total)))),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Page {} does not exist (1-{}).",
            page, total
        )))),
    }
}
