//! The interactive command loop.
//!
//! Stdin is read on a dedicated thread and fed through a channel so the loop
//! can race each line against an interrupt (Ctrl-C in the binary). An
//! interrupt ends the loop the same way `exit` does; the caller then saves.

use std::{
  future::Future,
  io::{self, BufRead, Write},
};

use chrono::{Local, NaiveDate};
use rolodex_core::Directory;
use tokio::sync::mpsc;

use crate::commands::{self, Outcome, Schedule};

/// Lines read from stdin, one message per line; the channel closes at EOF.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
  let (tx, rx) = mpsc::unbounded_channel();
  std::thread::spawn(move || {
    for line in io::stdin().lock().lines() {
      if tx.send(line).is_err() {
        break;
      }
    }
  });
  rx
}

/// Local calendar date; all scheduling works on naive dates.
pub fn local_today() -> NaiveDate { Local::now().date_naive() }

/// Run the loop until `exit`, end of input or `interrupt` resolves.
///
/// Lines already waiting in the channel are handled before the interrupt.
pub async fn run<W: Write>(
  lines: &mut mpsc::UnboundedReceiver<io::Result<String>>,
  out: &mut W,
  dir: &mut Directory,
  horizon_days: u32,
  today: impl Fn() -> NaiveDate,
  interrupt: impl Future<Output = io::Result<()>>,
) -> io::Result<()> {
  tokio::pin!(interrupt);
  writeln!(out, "Welcome to the assistant bot!")?;

  loop {
    write!(out, "Enter a command: ")?;
    out.flush()?;

    let line = tokio::select! {
      biased;
      line = lines.recv() => line,
      _ = &mut interrupt => {
        writeln!(out, "\nInterrupted. Saving data...")?;
        tracing::info!("interrupted");
        break;
      }
    };

    let Some(line) = line.transpose()? else {
      writeln!(out)?;
      tracing::debug!("end of input");
      break;
    };

    let schedule = Schedule {
      today: today(),
      horizon_days,
    };
    match commands::dispatch(&line, dir, schedule) {
      Outcome::Reply(message) => writeln!(out, "{message}")?,
      Outcome::Exit(message) => {
        writeln!(out, "{message}")?;
        break;
      }
      Outcome::Silent => {}
    }
  }

  Ok(())
}
