//! The interactive shell: line parsing, the read-eval-print loop, and
//! terminal output. Only this module and `main.rs` touch stdin/stdout.

pub mod parse;
pub mod print;
pub mod repl;
