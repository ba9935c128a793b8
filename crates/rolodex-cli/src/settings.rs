//! Runtime settings, layered from defaults, an optional TOML file, `ROLODEX_*`
//! environment variables and command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rolodex_core::DEFAULT_HORIZON_DAYS;
use serde::Deserialize;

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Where the directory snapshot lives.
  pub data_file:    PathBuf,
  /// How many days ahead `birthdays` looks.
  pub horizon_days: u32,
}

impl Settings {
  /// Build settings from `config_file` (if it exists) and the environment.
  /// `data_file` wins over both when given.
  pub fn load(
    config_file: &Path,
    data_file: Option<PathBuf>,
  ) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder()
      .set_default("data_file", DEFAULT_DATA_FILE)?
      .set_default("horizon_days", i64::from(DEFAULT_HORIZON_DAYS))?
      .add_source(config::File::from(config_file.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("ROLODEX"));

    if let Some(path) = data_file {
      builder =
        builder.set_override("data_file", path.to_string_lossy().into_owned())?;
    }

    let mut settings: Settings = builder
      .build()
      .with_context(|| format!("failed to read config {}", config_file.display()))?
      .try_deserialize()
      .context("failed to deserialise Settings")?;

    settings.data_file = expand_tilde(&settings.data_file);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
