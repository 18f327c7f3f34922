use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Invalid {field} '{value}': expected {expected}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Missing arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Address book at {} is corrupt: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RolodexError {
    pub fn invalid(field: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        RolodexError::InvalidFormat {
            field,
            value: value.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
