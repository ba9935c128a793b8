//! Line parsing, command handlers and the error-to-message boundary.
//!
//! Every handler takes the positional arguments and the directory and returns
//! the text to show. Failures never escape [`dispatch`]; [`respond`] turns
//! them into the same short messages the user sees for success.

use chrono::NaiveDate;
use rolodex_core::{Directory, Upsert};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CommandError {
  #[error("Not enough arguments.")]
  MissingArguments,

  #[error("Contact not found.")]
  ContactNotFound,

  #[error(transparent)]
  Core(#[from] rolodex_core::Error),
}

pub type CommandResult = Result<String, CommandError>;

/// Collapse a handler result into the line shown to the user.
pub fn respond(result: CommandResult) -> String {
  result.unwrap_or_else(|e| {
    tracing::debug!(error = ?e, "command failed");
    e.to_string()
  })
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Split `line` on whitespace into a lower-cased command and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
  let mut parts = line.split_whitespace();
  let command = parts.next().map(str::to_lowercase).unwrap_or_default();
  (command, parts.map(str::to_owned).collect())
}

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Print the message and prompt again.
  Reply(String),
  /// Print the message and leave the loop.
  Exit(String),
  /// Nothing to print (blank line).
  Silent,
}

/// Date context for the `birthdays` command.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
  pub today:        NaiveDate,
  pub horizon_days: u32,
}

/// Parse `line` and run the matching handler against `dir`.
pub fn dispatch(line: &str, dir: &mut Directory, schedule: Schedule) -> Outcome {
  let (command, args) = parse_input(line);
  tracing::debug!(%command, argc = args.len(), "dispatching");

  let result = match command.as_str() {
    "" => return Outcome::Silent,
    "close" | "exit" => return Outcome::Exit("Good bye!".into()),
    "hello" => Ok("How can I help you?".into()),
    "add" => add_contact(&args, dir),
    "change" => change_contact(&args, dir),
    "phone" => show_phone(&args, dir),
    "all" => show_all(&args, dir),
    "add-birthday" => add_birthday(&args, dir),
    "show-birthday" => show_birthday(&args, dir),
    "birthdays" => birthdays(&args, dir, schedule),
    _ => Ok("Invalid command.".into()),
  };
  Outcome::Reply(respond(result))
}

// ─── Handlers ────────────────────────────────────────────────────────────────

fn arg(args: &[String], idx: usize) -> Result<&str, CommandError> {
  args
    .get(idx)
    .map(String::as_str)
    .ok_or(CommandError::MissingArguments)
}

/// `add <name> <phone>`
pub fn add_contact(args: &[String], dir: &mut Directory) -> CommandResult {
  let (name, phone) = (arg(args, 0)?, arg(args, 1)?);
  let message = match dir.upsert_phone(name, phone)? {
    Upsert::Created => "Contact added.",
    Upsert::Updated => "Contact updated.",
  };
  Ok(message.into())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], dir: &mut Directory) -> CommandResult {
  let (name, old, new) = (arg(args, 0)?, arg(args, 1)?, arg(args, 2)?);
  let record = dir.find_mut(name).ok_or(CommandError::ContactNotFound)?;
  record.edit_phone(old, new)?;
  Ok("Phone number changed.".into())
}

/// `phone <name>`
pub fn show_phone(args: &[String], dir: &mut Directory) -> CommandResult {
  let record = dir.find(arg(args, 0)?).ok_or(CommandError::ContactNotFound)?;
  Ok(
    record
      .phones_joined()
      .unwrap_or_else(|| "No phones for this contact.".into()),
  )
}

/// `all`
pub fn show_all(_args: &[String], dir: &mut Directory) -> CommandResult {
  Ok(dir.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], dir: &mut Directory) -> CommandResult {
  let (name, date) = (arg(args, 0)?, arg(args, 1)?);
  let record = dir.find_mut(name).ok_or(CommandError::ContactNotFound)?;
  record.set_birthday(date)?;
  Ok("Birthday added.".into())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], dir: &mut Directory) -> CommandResult {
  let record = dir.find(arg(args, 0)?).ok_or(CommandError::ContactNotFound)?;
  Ok(match &record.birthday {
    Some(bday) => bday.to_string(),
    None => "Birthday is not set.".into(),
  })
}

/// `birthdays`
pub fn birthdays(
  _args: &[String],
  dir: &mut Directory,
  schedule: Schedule,
) -> CommandResult {
  let upcoming = dir.upcoming_birthdays(schedule.today, schedule.horizon_days);
  if upcoming.is_empty() {
    return Ok(format!(
      "No birthdays in the next {} days.",
      schedule.horizon_days
    ));
  }
  let lines: Vec<String> = upcoming
    .iter()
    .map(|c| format!("{}: {}", c.name, c.date.format("%d.%m.%Y")))
    .collect();
  Ok(lines.join("\n"))
}
