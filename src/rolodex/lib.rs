//! # Rolodex Architecture
//!
//! Rolodex is a contact book library with a small interactive shell on top.
//! The shell is one client; everything it can do goes through [`api`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, parses commands, prints results             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook and the store for a session         │
//! │  - Tracks unsaved changes                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (field.rs, model.rs, book.rs)                       │
//! │  - Validated values, contact records, the address book      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - A [`field::Phone`] holds digits only, a [`field::Name`] letters only, a
//!   [`field::Birthday`] a real calendar date. There is no way to build one
//!   that breaks its rule, including deserialization.
//! - Names in an [`book::AddressBook`] are unique; iteration follows
//!   insertion order.
//! - `save` never leaves a half-written file in place of a good one.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each user command
//! - [`book`]: The in-memory address book
//! - [`model`]: `ContactRecord`
//! - [`field`]: Validated field types
//! - [`store`]: Persistence
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod model;
pub mod store;
