//! `rolodex` — interactive contact directory with birthday reminders.
//!
//! # Usage
//!
//! ```text
//! rolodex
//! rolodex --data-file ~/contacts.json
//! rolodex --config ~/.config/rolodex/rolodex.toml
//! ```
//!
//! The directory is loaded at startup and saved when the session ends,
//! whether by `exit`, end of input or Ctrl-C.

mod commands;
mod repl;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Contact directory with birthday reminders")]
struct Args {
  /// Path to a TOML config file (data_file, horizon_days).
  #[arg(short, long, value_name = "FILE", default_value = "rolodex.toml")]
  config: PathBuf,

  /// Where to load and save the directory snapshot.
  #[arg(short, long, value_name = "FILE")]
  data_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so they never interleave with command output.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let settings = Settings::load(&args.config, args.data_file)?;
  tracing::debug!(?settings, "settings loaded");

  let mut directory = rolodex_store::load(&settings.data_file);

  let mut lines = repl::spawn_stdin_reader();
  let mut stdout = std::io::stdout();
  let run_result = repl::run(
    &mut lines,
    &mut stdout,
    &mut directory,
    settings.horizon_days,
    repl::local_today,
    tokio::signal::ctrl_c(),
  )
  .await;

  // Save regardless of how the loop ended.
  match rolodex_store::save(&settings.data_file, &directory) {
    Ok(()) => tracing::info!(
      path = %settings.data_file.display(),
      contacts = directory.len(),
      "directory saved"
    ),
    Err(e) => {
      tracing::error!(path = %settings.data_file.display(), error = %e, "save failed");
      eprintln!("Failed to save {}: {e}", settings.data_file.display());
    }
  }

  run_result.map_err(Into::into)
}
