//! Turns one line of user input into a [`Command`].
//!
//! Keywords are matched case-insensitively. Arguments are passed through
//! exactly as typed: `ADD alice 123` adds `alice` (title-cased later by the
//! name field), and `find ali` searches for the literal `ali`.

use rolodex::error::{RolodexError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    AddPhone { name: String, phone: String },
    RemovePhone { name: String, phone: String },
    EditPhone { name: String, old: String, new: String },
    Birthday { name: String, date: String },
    Days { name: String },
    Remove { name: String },
    Find { query: String },
    ShowAll,
    ShowPage(usize),
    Save,
    Load,
    Help,
    Exit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let keyword = match tokens.next() {
        Some(k) => k.to_lowercase(),
        None => return Ok(Command::Empty),
    };
    let args: Vec<&str> = tokens.collect();

    match keyword.as_str() {
        "hello" => no_args(&args, "hello", Command::Hello),
        "add" => {
            let [name, phone] = exact::<2>(&args, "add", "add <name> <phone>")?;
            Ok(Command::Add { name, phone })
        }
        "change" => {
            let [name, phone] = exact::<2>(&args, "change", "change <name> <phone>")?;
            Ok(Command::Change { name, phone })
        }
        "phone" => {
            let [name] = exact::<1>(&args, "phone", "phone <name>")?;
            Ok(Command::Phone { name })
        }
        "add-phone" => {
            let [name, phone] = exact::<2>(&args, "add-phone", "add-phone <name> <phone>")?;
            Ok(Command::AddPhone { name, phone })
        }
        "remove-phone" => {
            let [name, phone] =
                exact::<2>(&args, "remove-phone", "remove-phone <name> <phone>")?;
            Ok(Command::RemovePhone { name, phone })
        }
        "edit-phone" => {
            let [name, old, new] =
                exact::<3>(&args, "edit-phone", "edit-phone <name> <old> <new>")?;
            Ok(Command::EditPhone { name, old, new })
        }
        "birthday" => {
            let [name, date] = exact::<2>(&args, "birthday", "birthday <name> <YYYY-MM-DD>")?;
            Ok(Command::Birthday { name, date })
        }
        "days" => {
            let [name] = exact::<1>(&args, "days", "days <name>")?;
            Ok(Command::Days { name })
        }
        "remove" => {
            let [name] = exact::<1>(&args, "remove", "remove <name>")?;
            Ok(Command::Remove { name })
        }
        "find" => {
            if args.is_empty() {
                return Err(missing("find", "find <query>"));
            }
            Ok(Command::Find {
                query: args.join(" "),
            })
        }
        "show" => parse_show(&args),
        "save" => no_args(&args, "save", Command::Save),
        "load" => no_args(&args, "load", Command::Load),
        "help" => Ok(Command::Help),
        "close" | "exit" => no_args(&args, &keyword, Command::Exit),
        "good" if args.len() == 1 && args[0].eq_ignore_ascii_case("bye") => Ok(Command::Exit),
        _ => Err(RolodexError::UnknownCommand(line.trim().to_string())),
    }
}

fn parse_show(args: &[&str]) -> Result<Command> {
    const USAGE: &str = "show all | show page <n>";
    match args {
        [all] if all.eq_ignore_ascii_case("all") => Ok(Command::ShowAll),
        [page, n] if page.eq_ignore_ascii_case("page") => match n.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Command::ShowPage(n)),
            _ => Err(RolodexError::invalid("page", *n, "a positive number")),
        },
        _ => Err(missing("show", USAGE)),
    }
}

fn exact<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> Result<[String; N]> {
    if args.len() != N {
        return Err(missing(command, usage));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

fn no_args(args: &[&str], keyword: &str, command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(RolodexError::UnknownCommand(
            std::iter::once(keyword)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" "),
        ))
    }
}

fn missing(command: &'static str, usage: &'static str) -> RolodexError {
    RolodexError::MissingArguments { command, usage }
}
