//! Error types for `rolodex-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Phone number must contain 10 digits.")]
  InvalidPhone(String),

  #[error("Invalid date format. Use DD.MM.YYYY")]
  InvalidBirthday(String),

  #[error("Phone not found.")]
  PhoneNotFound(String),
}

impl Error {
  /// Whether the error rejects a malformed value rather than a missing one.
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::InvalidPhone(_) | Self::InvalidBirthday(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
