use super::parse::{parse_line, Command};
use super::print::{print_contacts, print_error, print_messages, HELP};
use rolodex::api::{CmdResult, RolodexApi};
use rolodex::error::{RolodexError, Result};
use rolodex::store::BookStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const PROMPT: &str = "Enter command: ";

enum Flow {
    Continue,
    Exit,
}

/// Reads commands from `input` until an exit command or end of input, then
/// saves the book (see [`RolodexApi::close`]). Command failures are printed and the loop carries on;
/// only output errors and a failed final save end it with an error.
pub fn run<S, R, W>(api: &mut RolodexApi<S>, mut input: R, out: &mut W) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail to parse as a
        // command instead of ending the session.
        line.clear();
        let command = if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            debug!("end of input, closing session");
            Ok(Command::Exit)
        } else {
            parse_line(&String::from_utf8_lossy(&line))
        };

        let flow = match command {
            Ok(command) => dispatch(api, command, out)?,
            Err(e) => {
                print_error(out, &e)?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return finish(api, out);
        }
    }
}

fn dispatch<S: BookStore, W: Write>(
    api: &mut RolodexApi<S>,
    command: Command,
    out: &mut W,
) -> Result<Flow> {
    let result = match command {
        Command::Empty => return Ok(Flow::Continue),
        Command::Exit => return Ok(Flow::Exit),
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        Command::Hello => api.load().map(|mut r| {
            r.messages.clear();
            r.add_message(rolodex::api::CmdMessage::info("How can I help you?"));
            r
        }),
        Command::Add { name, phone } => api.add_contact(&name, &phone),
        Command::Change { name, phone } => api.change_contact(&name, &phone),
        Command::Phone { name } => api.show_phones(&name),
        Command::AddPhone { name, phone } => api.add_phone(&name, &phone),
        Command::RemovePhone { name, phone } => api.remove_phone(&name, &phone),
        Command::EditPhone { name, old, new } => api.edit_phone(&name, &old, &new),
        Command::Birthday { name, date } => api.set_birthday(&name, &date),
        Command::Days { name } => api.days_to_birthday(&name),
        Command::Remove { name } => api.remove_contact(&name),
        Command::Find { query } => api.find(&query),
        Command::ShowAll => api.show_all(),
        Command::ShowPage(n) => api.show_page(n),
        Command::Save => api.save(),
        Command::Load => api.load(),
    };

    report(result, out)?;
    Ok(Flow::Continue)
}

fn report<W: Write>(result: Result<CmdResult>, out: &mut W) -> Result<()> {
    match result {
        Ok(r) => {
            print_contacts(out, &r.listed_contacts)?;
            print_messages(out, &r.messages)?;
        }
        Err(e) => {
            if let RolodexError::CorruptStore { .. } = e {
                warn!(error = %e, "address book could not be read");
            }
            print_error(out, &e)?;
        }
    }
    Ok(())
}

fn finish<S: BookStore, W: Write>(api: &mut RolodexApi<S>, out: &mut W) -> Result<()> {
    match api.close() {
        Ok(r) => {
            print_messages(out, &r.messages)?;
            writeln!(out, "Good bye!")?;
            Ok(())
        }
        Err(e) => {
            print_error(out, &e)?;
            Err(e)
        }
    }
}
