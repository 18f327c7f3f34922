//! # Command Layer
//!
//! One module per user-facing operation. Each command takes the address
//! book (and the store, for the session commands) as plain arguments and
//! returns a [`CmdResult`]: the contacts to display plus any messages.
//!
//! Commands never print. Validation failures and lookup misses come back as
//! `Err(RolodexError)`; turning those into text is the caller's job.

use crate::model::ContactRecord;

pub mod add;
pub mod birthday;
pub mod find;
pub mod phones;
pub mod remove;
pub mod session;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_contacts: Vec<ContactRecord>,
    pub messages: Vec<CmdMessage>,
    /// The in-memory book was modified by this command.
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<ContactRecord>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn changed(mut self) -> Self {
        self.changed = true;
        self
    }
}
